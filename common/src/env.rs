use anyhow::{anyhow, Result};

pub fn get_env_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(v) => v
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|_| anyhow!("{} must be a valid number, got {:?}", key, v)),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_var_is_none() {
        let value = get_env_usize("EXPLORER_TEST_SURELY_UNSET_VAR").unwrap();

        assert_eq!(value, None);
    }

    #[test]
    fn test_parses_number() {
        std::env::set_var("EXPLORER_TEST_ENV_NUMBER", " 132 ");

        assert_eq!(get_env_usize("EXPLORER_TEST_ENV_NUMBER").unwrap(), Some(132));
    }

    #[test]
    fn test_rejects_garbage() {
        std::env::set_var("EXPLORER_TEST_ENV_GARBAGE", "wide");

        assert!(get_env_usize("EXPLORER_TEST_ENV_GARBAGE").is_err());
    }
}
