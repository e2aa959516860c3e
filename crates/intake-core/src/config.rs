use std::{env, fs, path::Path};

use crate::{domain::ChatId, errors::Error, Result};

/// Typed configuration, built once at startup and injected into the router.
#[derive(Clone, Debug)]
pub struct Config {
    pub telegram_bot_token: String,
    pub admin_chat_id: ChatId,
}

impl Config {
    /// Read configuration from the process environment (after loading `.env`
    /// if present). Fails fast: a missing or malformed value aborts startup
    /// before any connection is made.
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_values(env_str("TELEGRAM_BOT_TOKEN"), env_str("ADMIN_CHAT_ID"))
    }

    fn from_values(token: Option<String>, admin_chat_id: Option<String>) -> Result<Self> {
        let telegram_bot_token = token.and_then(non_empty).ok_or_else(|| {
            Error::Config("TELEGRAM_BOT_TOKEN environment variable is required".to_string())
        })?;

        let admin_raw = admin_chat_id.and_then(non_empty).ok_or_else(|| {
            Error::Config("ADMIN_CHAT_ID environment variable is required".to_string())
        })?;
        let admin_chat_id = admin_raw.trim().parse::<i64>().map(ChatId).map_err(|_| {
            Error::Config(format!(
                "ADMIN_CHAT_ID must be a numeric chat id, got {admin_raw:?}"
            ))
        })?;

        Ok(Self {
            telegram_bot_token,
            admin_chat_id,
        })
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for (key, value) in parse_dotenv(&contents) {
        if env::var_os(&key).is_none() {
            env::set_var(key, value); // existing env always wins
        }
    }
}

/// Minimal `.env` syntax: `KEY=value` lines, `#` comments, optional
/// surrounding quotes on the value.
fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }

        let mut val = v.trim();
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = &val[1..val.len() - 1];
        }

        out.push((key.to_string(), val.to_string()));
    }

    out
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn loads_when_both_values_present() {
        let cfg = Config::from_values(s("123:abc"), s("987654321")).unwrap();
        assert_eq!(cfg.telegram_bot_token, "123:abc");
        assert_eq!(cfg.admin_chat_id, ChatId(987654321));
    }

    #[test]
    fn missing_or_blank_token_is_fatal() {
        assert!(matches!(
            Config::from_values(None, s("1")),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Config::from_values(s("   "), s("1")),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn missing_or_blank_admin_id_is_fatal() {
        assert!(matches!(
            Config::from_values(s("t"), None),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Config::from_values(s("t"), s("")),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn non_numeric_admin_id_is_fatal() {
        assert!(matches!(
            Config::from_values(s("t"), s("@admin")),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn negative_group_ids_parse() {
        let cfg = Config::from_values(s("t"), s("-1001234567890")).unwrap();
        assert_eq!(cfg.admin_chat_id, ChatId(-1001234567890));
    }

    #[test]
    fn dotenv_parsing_skips_comments_and_strips_quotes() {
        let parsed = parse_dotenv(
            "# comment\n\nTELEGRAM_BOT_TOKEN=\"123:abc\"\nADMIN_CHAT_ID='42'\nnot a pair\n =nope\n",
        );
        assert_eq!(
            parsed,
            vec![
                ("TELEGRAM_BOT_TOKEN".to_string(), "123:abc".to_string()),
                ("ADMIN_CHAT_ID".to_string(), "42".to_string()),
            ]
        );
    }
}
