//! Macro for implementing Display and FromStr for token-mapped enums
//!
//! The backend exchanges several enums as short string tokens (channel
//! markers, freezone step tokens, event names). This macro generates the
//! Display and FromStr pair for a unit-variant enum from one token table so
//! the two directions cannot drift apart.
//!
//! Matching is exact: tokens such as `"1a"` and `"approveEVisa"` are
//! case-sensitive on the wire.
//!
//! # Example
//!
//! ```rust
//! use visadesk_domain::impl_token_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Channel {
//!     Mainland,
//!     Freezone,
//! }
//!
//! impl_token_conversions!(Channel {
//!     Mainland => "inside",
//!     Freezone => "outside",
//! });
//!
//! assert_eq!(Channel::Mainland.to_string(), "inside");
//! assert_eq!("outside".parse::<Channel>(), Ok(Channel::Freezone));
//! ```

/// Implements Display and FromStr traits for token-mapped enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $token` - Mapping of enum variants to their wire tokens
#[macro_export]
macro_rules! impl_token_conversions {
    ($enum_name:ident { $($variant:ident => $token:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($token),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    // Test enum for macro validation
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestToken {
        Draft,
        Submitted,
        Done,
    }

    impl_token_conversions!(TestToken {
        Draft => "1",
        Submitted => "1a",
        Done => "6",
    });

    #[test]
    fn test_display_conversion() {
        assert_eq!(TestToken::Draft.to_string(), "1");
        assert_eq!(TestToken::Submitted.to_string(), "1a");
        assert_eq!(TestToken::Done.to_string(), "6");
    }

    #[test]
    fn test_fromstr_tokens() {
        assert_eq!(TestToken::from_str("1").unwrap(), TestToken::Draft);
        assert_eq!(TestToken::from_str("1a").unwrap(), TestToken::Submitted);
        assert_eq!(TestToken::from_str("6").unwrap(), TestToken::Done);
    }

    #[test]
    fn test_fromstr_is_case_sensitive() {
        assert!(TestToken::from_str("1A").is_err());
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestToken::from_str("7");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid TestToken: 7"));
    }

    #[test]
    fn test_roundtrip() {
        for token in [TestToken::Draft, TestToken::Submitted, TestToken::Done] {
            let parsed = TestToken::from_str(&token.to_string()).unwrap();
            assert_eq!(token, parsed);
        }
    }
}
