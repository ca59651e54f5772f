// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — literals, consts, &str vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! task_key {
    // "T<id>_Score": the field name a score lives under everywhere
    ($id:expr) => {
        ::std::format!("T{}_Score", $id)
    };
}
