// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use std::collections::HashSet;

/// Longest accepted free-text field.
pub const MAX_TEXT_LENGTH: usize = 255;

/// Validates a product or category name.
///
/// # Errors
///
/// Returns an error if the name is blank or longer than [`MAX_TEXT_LENGTH`].
pub fn validate_name(name: &str) -> Result<(), DomainError> {
    // Rule: name must not be blank
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }

    if name.chars().count() > MAX_TEXT_LENGTH {
        return Err(DomainError::InvalidName(format!(
            "Name cannot exceed {MAX_TEXT_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Validates a customer display name.
///
/// # Errors
///
/// Returns an error if the display name is blank or too long.
pub fn validate_display_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidDisplayName(String::from(
            "Display name cannot be empty",
        )));
    }
    if name.chars().count() > MAX_TEXT_LENGTH {
        return Err(DomainError::InvalidDisplayName(format!(
            "Display name cannot exceed {MAX_TEXT_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validates a URL slug.
///
/// Slugs are lowercase ASCII letters, digits and single hyphens, and may
/// not start or end with a hyphen.
///
/// # Errors
///
/// Returns an error if the slug does not match that shape.
pub fn validate_slug(slug: &str) -> Result<(), DomainError> {
    if slug.is_empty() {
        return Err(DomainError::InvalidSlug(String::from(
            "Slug cannot be empty",
        )));
    }

    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(DomainError::InvalidSlug(format!(
            "'{slug}' may only contain lowercase letters, digits and hyphens"
        )));
    }

    if slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
        return Err(DomainError::InvalidSlug(format!(
            "'{slug}' has a leading, trailing or repeated hyphen"
        )));
    }

    Ok(())
}

/// Validates a `#RRGGBB` hex color code.
///
/// # Errors
///
/// Returns an error if the value is not exactly `#` followed by six hex digits.
pub fn validate_color_value(value: &str) -> Result<(), DomainError> {
    let valid: bool = value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit());

    if valid {
        Ok(())
    } else {
        Err(DomainError::InvalidColorValue(value.to_string()))
    }
}

/// Validates a color variant display name.
///
/// # Errors
///
/// Returns an error if the name is blank or too long.
pub fn validate_color_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidColorName(String::from(
            "Color name cannot be empty",
        )));
    }
    if name.chars().count() > MAX_TEXT_LENGTH {
        return Err(DomainError::InvalidColorName(format!(
            "Color name cannot exceed {MAX_TEXT_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validates an image URL.
///
/// Accepts absolute `http(s)` URLs and site-relative paths.
///
/// # Errors
///
/// Returns an error if the URL is blank, contains whitespace, or is neither
/// absolute nor site-relative.
pub fn validate_image_url(url: &str) -> Result<(), DomainError> {
    if url.is_empty() {
        return Err(DomainError::InvalidImageUrl(String::from(
            "Image URL cannot be empty",
        )));
    }
    if url.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidImageUrl(format!(
            "'{url}' contains whitespace"
        )));
    }
    if !(url.starts_with('/') || url.starts_with("http://") || url.starts_with("https://")) {
        return Err(DomainError::InvalidImageUrl(format!(
            "'{url}' must be an http(s) URL or start with '/'"
        )));
    }
    Ok(())
}

/// Validates the size labels offered by a product.
///
/// # Errors
///
/// Returns an error if any label is blank or if two labels are equal
/// ignoring case.
pub fn validate_sizes(sizes: &[String]) -> Result<(), DomainError> {
    let mut seen: HashSet<String> = HashSet::new();
    for size in sizes {
        if size.trim().is_empty() {
            return Err(DomainError::InvalidSize(String::from(
                "Size labels cannot be empty",
            )));
        }
        if !seen.insert(size.to_ascii_lowercase()) {
            return Err(DomainError::InvalidSize(format!(
                "Size '{size}' is listed more than once"
            )));
        }
    }
    Ok(())
}

/// Validates an email address.
///
/// This is a structural check only: one `@` with a non-empty local part and
/// a domain containing a dot.
///
/// # Errors
///
/// Returns an error if the address is malformed.
pub fn validate_email(email: &str) -> Result<(), DomainError> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err(DomainError::InvalidEmail(email.to_string()));
    };

    let valid: bool = !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
        && email.len() <= MAX_TEXT_LENGTH;

    if valid {
        Ok(())
    } else {
        Err(DomainError::InvalidEmail(email.to_string()))
    }
}

/// Validates a stock count supplied by a client.
///
/// # Errors
///
/// Returns an error if the value is negative or does not fit in the
/// stored column.
pub fn validate_stock(stock: i64) -> Result<u32, DomainError> {
    if stock < 0 || stock > i64::from(i32::MAX) {
        return Err(DomainError::InvalidStock(stock));
    }
    u32::try_from(stock).map_err(|_| DomainError::InvalidStock(stock))
}
