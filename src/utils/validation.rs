use crate::utils::error::{FetchError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FetchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FetchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| FetchError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FetchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 值會成為 scp 的獨立參數，開頭為 `-` 時會被當成選項
pub fn validate_not_option(field_name: &str, value: &str) -> Result<()> {
    if value.starts_with('-') {
        return Err(FetchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot start with '-'".to_string(),
        });
    }
    Ok(())
}

/// `[::1]` 這類 IPv6 位址字面值
fn is_bracketed_ipv6(host: &str) -> bool {
    host.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .map(|inner| {
            inner.contains(':')
                && inner
                    .chars()
                    .all(|c| c.is_ascii_hexdigit() || c == ':' || c == '.')
        })
        .unwrap_or(false)
}

/// 主機名稱會直接放進 `user@host:path`，不能含有會改變 scp 解析方式的字元
pub fn validate_host(field_name: &str, host: &str) -> Result<()> {
    validate_non_empty_string(field_name, host)?;

    let reason = if host.starts_with('-') {
        Some("Host cannot start with '-'")
    } else if host.chars().any(char::is_whitespace) {
        Some("Host cannot contain whitespace")
    } else if host.contains('@') {
        Some("Host cannot contain '@'")
    } else if host.contains(':') && !is_bracketed_ipv6(host) {
        Some("Host cannot contain ':' unless it is a bracketed IPv6 address")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(FetchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: host.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

pub fn validate_user(field_name: &str, user: &str) -> Result<()> {
    validate_non_empty_string(field_name, user)?;

    if user.contains('@') || user.contains(':') || user.starts_with('-') {
        return Err(FetchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: user.to_string(),
            reason: "User cannot start with '-' or contain '@' or ':'".to_string(),
        });
    }
    Ok(())
}
