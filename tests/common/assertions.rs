//! Custom assertion macros
//!
//! Provides assertion macros with more descriptive failure messages.

#![allow(unused_macros)]

/// Assert that a result is ok and return the value
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert that a string contains a substring
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Assert that a response redirects to `$location` with 302 Found
macro_rules! assert_redirects_to {
    ($response:expr, $location:expr) => {
        assert_eq!($response.status_code(), axum::http::StatusCode::FOUND);
        assert_eq!(
            $response.header("location").to_str().expect("ascii location"),
            $location
        );
    };
}
