use std::env;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} wasn't in env vars")]
    Missing(&'static str),
    #[error("Invalid guild id '{0}'")]
    InvalidGuild(String),
    #[error("No guilds to watch")]
    NoGuilds,
}

const WATCHED_GUILDS: &str = "WATCHED_GUILDS";

pub fn watched_guilds() -> Result<Vec<u64>, ConfigError> {
    let guilds = env::var(WATCHED_GUILDS).map_err(|_| ConfigError::Missing(WATCHED_GUILDS))?;
    parse_guilds(&guilds)
}

fn parse_guilds(guilds: &str) -> Result<Vec<u64>, ConfigError> {
    let guilds = guilds
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| match id.parse::<u64>() {
            Ok(id) if id > 0 => Ok(id),
            _ => Err(ConfigError::InvalidGuild(id.to_string())),
        })
        .collect::<Result<Vec<_>, _>>()?;

    if guilds.is_empty() {
        return Err(ConfigError::NoGuilds);
    }
    Ok(guilds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_guild() {
        assert_eq!(parse_guilds("123456789"), Ok(vec![123_456_789]));
    }

    #[test]
    fn test_guild_list_with_whitespace() {
        assert_eq!(parse_guilds(" 1, 2 ,3,, "), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn test_invalid_guild() {
        assert_eq!(
            parse_guilds("1,general"),
            Err(ConfigError::InvalidGuild(String::from("general")))
        );
    }

    #[test]
    fn test_zero_guild_id() {
        assert_eq!(
            parse_guilds("0"),
            Err(ConfigError::InvalidGuild(String::from("0")))
        );
    }

    #[test]
    fn test_no_guilds() {
        assert_eq!(parse_guilds(" , "), Err(ConfigError::NoGuilds));
        assert_eq!(parse_guilds(""), Err(ConfigError::NoGuilds));
    }
}
