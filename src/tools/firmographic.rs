//! Firmographic lookup. Static estimates until a data provider is wired in.

use crate::agent::{FirmographicProfile, FirmographicResult};

const ESTIMATED_SIZE: &str = "1,000-5,000 employees (estimated)";
const ESTIMATED_INDUSTRY: &str = "Software";

pub fn get_firmographic_info(company_name: &str) -> FirmographicResult {
    if company_name.is_empty() {
        return FirmographicResult::Error {
            error: "No company name provided".to_string(),
        };
    }

    FirmographicResult::Profile(FirmographicProfile {
        company_name: company_name.to_string(),
        size: ESTIMATED_SIZE.to_string(),
        industry: ESTIMATED_INDUSTRY.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_an_error() {
        assert_eq!(
            get_firmographic_info(""),
            FirmographicResult::Error {
                error: "No company name provided".into()
            }
        );
    }

    #[test]
    fn known_name_gets_estimates() {
        match get_firmographic_info("ExampleCorp") {
            FirmographicResult::Profile(profile) => {
                assert_eq!(profile.company_name, "ExampleCorp");
                assert_eq!(profile.industry, "Software");
                assert_eq!(profile.size, "1,000-5,000 employees (estimated)");
            }
            other => panic!("expected profile, got {:?}", other),
        }
    }
}
