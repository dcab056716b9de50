use super::*;

mod taxonomy;
mod variant;

pub(crate) use taxonomy::ParsedTaxonomy;
pub(crate) use variant::ParsedVariant;

/// Converts a variant identifier such as `UserType` into `USER_TYPE`.
pub(crate) fn screaming_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower_or_digit = false;
    for ch in name.chars() {
        if ch == '_' {
            out.push('_');
            prev_lower_or_digit = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower_or_digit {
            out.push('_');
        }
        prev_lower_or_digit = ch.is_lowercase() || ch.is_ascii_digit();
        out.extend(ch.to_uppercase());
    }
    out
}

/// Reads a string literal from `name = "..."`, rejecting empty values.
fn non_empty_lit(meta: &syn::meta::ParseNestedMeta<'_>, what: &str) -> Result<LitStr> {
    let lit: LitStr = meta.value()?.parse()?;
    if lit.value().trim().is_empty() {
        return Err(Error::new(lit.span(), format!("taxonomy {what} must not be empty")));
    }
    Ok(lit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_camel_case_to_screaming_snake() {
        assert_eq!(screaming_snake_case("Created"), "CREATED");
        assert_eq!(screaming_snake_case("UserType"), "USER_TYPE");
        assert_eq!(screaming_snake_case("BooleanMapping"), "BOOLEAN_MAPPING");
        assert_eq!(screaming_snake_case("Range2d"), "RANGE2D");
        assert_eq!(screaming_snake_case("Already_Snake"), "ALREADY_SNAKE");
    }
}
