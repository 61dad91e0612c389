//! Property-based tests for function-call extraction

use proptest::prelude::*;
use serde_json::json;

use qps_simulator::functions::{extract_function_call, FunctionName};

fn function_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(FunctionName::ALL.iter().map(|f| f.as_str()).collect::<Vec<_>>())
}

proptest! {
    /// A call surrounded by brace-free prose is always recovered
    #[test]
    fn test_call_recovered_from_prose(
        prefix in "[a-zA-Z0-9 ,.:!?\n]{0,80}",
        suffix in "[a-zA-Z0-9 ,.:!?\n]{0,80}",
        function in function_name(),
        window in 1i64..1000,
    ) {
        let call = json!({
            "function": function,
            "parameters": {"time_window_minutes": window}
        });
        let text = format!("{}{}{}", prefix, call, suffix);

        let extracted = extract_function_call(&text).unwrap();
        prop_assert_eq!(extracted.function.as_str(), function);
        prop_assert_eq!(&extracted.parameters["time_window_minutes"], &json!(window));
    }

    /// A fenced block wins over any stray braces elsewhere
    #[test]
    fn test_fenced_block_preferred(
        noise in "[a-z ]{0,40}",
        function in function_name(),
    ) {
        let text = format!(
            "{{not json}} {}\n```json\n{}\n```\ntrailing }}",
            noise,
            json!({"function": function, "parameters": {}})
        );

        let extracted = extract_function_call(&text).unwrap();
        prop_assert_eq!(extracted.function.as_str(), function);
    }

    /// Text without braces never yields a call
    #[test]
    fn test_no_braces_no_call(text in "[^{}]{0,200}") {
        prop_assert!(extract_function_call(&text).is_none());
    }
}
