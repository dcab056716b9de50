use super::*;

pub(crate) struct ParsedVariant {
    pub ident: Ident,
    pub key: LitStr,
    pub value: LitStr,
}

impl ParsedVariant {
    pub(crate) fn from_variant(variant: &syn::Variant) -> Result<Self> {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(Error::new_spanned(
                &variant.fields,
                "Taxonomy variants must be unit variants without fields",
            ));
        }
        if let Some((_, discriminant)) = &variant.discriminant {
            return Err(Error::new_spanned(
                discriminant,
                "Taxonomy variants must not declare explicit discriminants",
            ));
        }

        let mut key: Option<LitStr> = None;
        let mut value: Option<LitStr> = None;

        for attr in &variant.attrs {
            if !attr.path().is_ident("taxonomy") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("value") {
                    if value.is_some() {
                        return Err(meta.error("duplicate `value` for taxonomy variant"));
                    }
                    value = Some(non_empty_lit(&meta, "value")?);
                    Ok(())
                } else if meta.path.is_ident("key") {
                    if key.is_some() {
                        return Err(meta.error("duplicate `key` for taxonomy variant"));
                    }
                    key = Some(non_empty_lit(&meta, "key")?);
                    Ok(())
                } else {
                    Err(meta.error("unsupported taxonomy variant attribute; expected `value` or `key`"))
                }
            })?;
        }

        let value = value.ok_or_else(|| {
            Error::new(
                variant.ident.span(),
                format!("variant `{}` is missing #[taxonomy(value = \"...\")]", variant.ident),
            )
        })?;
        let key = key.unwrap_or_else(|| {
            LitStr::new(&screaming_snake_case(&variant.ident.to_string()), variant.ident.span())
        });

        Ok(Self {
            ident: variant.ident.clone(),
            key,
            value,
        })
    }
}
