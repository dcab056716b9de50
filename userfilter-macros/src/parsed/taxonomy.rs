use std::collections::HashMap;

use super::*;

pub(crate) struct ParsedTaxonomy {
    name: Ident,
    table: LitStr,
    variants: Vec<ParsedVariant>,
}

impl ParsedTaxonomy {
    pub(crate) fn from_input(input: &DeriveInput) -> Result<Self> {
        if !input.generics.params.is_empty() {
            return Err(Error::new_spanned(
                &input.generics,
                "Taxonomy cannot be derived for generic enums",
            ));
        }

        let data = match &input.data {
            Data::Enum(data) => data,
            _ => return Err(Error::new(input.ident.span(), "Taxonomy can only be derived for enums")),
        };

        let table = Self::parse_table(&input.attrs)?.ok_or_else(|| {
            Error::new(
                input.ident.span(),
                "Taxonomy requires #[taxonomy(table = \"...\")] on the enum",
            )
        })?;

        if data.variants.is_empty() {
            return Err(Error::new(input.ident.span(), "Taxonomy requires at least one variant"));
        }

        let mut variants = Vec::with_capacity(data.variants.len());
        for variant in &data.variants {
            variants.push(ParsedVariant::from_variant(variant)?);
        }

        Self::ensure_unique(&variants, "key", |variant| &variant.key)?;
        Self::ensure_unique(&variants, "value", |variant| &variant.value)?;

        Ok(Self {
            name: input.ident.clone(),
            table,
            variants,
        })
    }

    fn parse_table(attrs: &[Attribute]) -> Result<Option<LitStr>> {
        let mut table = None;
        for attr in attrs {
            if !attr.path().is_ident("taxonomy") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("table") {
                    if table.is_some() {
                        return Err(meta.error("duplicate `table` for taxonomy"));
                    }
                    table = Some(non_empty_lit(&meta, "table")?);
                    Ok(())
                } else {
                    Err(meta.error("unsupported taxonomy attribute; expected `table`"))
                }
            })?;
        }
        Ok(table)
    }

    fn ensure_unique(
        variants: &[ParsedVariant],
        what: &str,
        select: impl Fn(&ParsedVariant) -> &LitStr,
    ) -> Result<()> {
        let mut seen: HashMap<String, &Ident> = HashMap::new();
        for variant in variants {
            let lit = select(variant);
            if let Some(previous) = seen.insert(lit.value(), &variant.ident) {
                return Err(Error::new(
                    lit.span(),
                    format!(
                        "duplicate taxonomy {what} \"{}\" (also used by `{previous}`)",
                        lit.value()
                    ),
                ));
            }
        }
        Ok(())
    }

    pub(crate) fn emit(&self) -> TokenStream2 {
        let name = &self.name;
        let table = &self.table;
        let idents: Vec<&Ident> = self.variants.iter().map(|variant| &variant.ident).collect();
        let keys: Vec<&LitStr> = self.variants.iter().map(|variant| &variant.key).collect();
        let values: Vec<&LitStr> = self.variants.iter().map(|variant| &variant.value).collect();

        quote! {
            impl ::userfilter::taxonomy::Taxonomy for #name {
                const TABLE: &'static str = #table;

                #[inline]
                fn all() -> &'static [Self] {
                    &[#(Self::#idents),*]
                }

                #[inline]
                fn key(self) -> &'static str {
                    match self {
                        #(Self::#idents => #keys,)*
                    }
                }

                #[inline]
                fn value(self) -> &'static str {
                    match self {
                        #(Self::#idents => #values,)*
                    }
                }

                fn lookup_key(key: &str) -> ::core::option::Option<Self> {
                    match key {
                        #(#keys => ::core::option::Option::Some(Self::#idents),)*
                        _ => ::core::option::Option::None,
                    }
                }

                fn lookup_value(value: &str) -> ::core::option::Option<Self> {
                    match value {
                        #(#values => ::core::option::Option::Some(Self::#idents),)*
                        _ => ::core::option::Option::None,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn parse(input: DeriveInput) -> Result<ParsedTaxonomy> {
        ParsedTaxonomy::from_input(&input)
    }

    fn error_of(input: DeriveInput) -> String {
        match parse(input) {
            Ok(_) => panic!("expected taxonomy parse to fail"),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn parses_table_and_default_keys() {
        let parsed = parse(parse_quote! {
            #[taxonomy(table = "USER_FILTER_FIELD")]
            enum FilterField {
                #[taxonomy(value = "Created")]
                Created,
                #[taxonomy(value = "User Type")]
                UserType,
            }
        })
        .expect("valid taxonomy");

        assert_eq!(parsed.table.value(), "USER_FILTER_FIELD");
        let keys: Vec<String> = parsed.variants.iter().map(|variant| variant.key.value()).collect();
        assert_eq!(keys, ["CREATED", "USER_TYPE"]);
        assert_eq!(parsed.variants[1].value.value(), "User Type");
    }

    #[test]
    fn explicit_key_overrides_default() {
        let parsed = parse(parse_quote! {
            #[taxonomy(table = "T")]
            enum Kind {
                #[taxonomy(value = "bool", key = "BOOLEAN")]
                Bool,
            }
        })
        .expect("valid taxonomy");
        assert_eq!(parsed.variants[0].key.value(), "BOOLEAN");
    }

    #[test]
    fn emitted_impl_targets_runtime_trait() {
        let parsed = parse(parse_quote! {
            #[taxonomy(table = "T")]
            enum Kind {
                #[taxonomy(value = "a")]
                A,
            }
        })
        .expect("valid taxonomy");
        let emitted = parsed.emit().to_string();
        assert!(emitted.contains("Taxonomy for Kind"), "{emitted}");
        assert!(emitted.contains("\"A\""));
    }

    #[test]
    fn rejects_structs() {
        let err = error_of(parse_quote! {
            #[taxonomy(table = "T")]
            struct NotAnEnum { a: u8 }
        });
        assert!(err.contains("only be derived for enums"), "{err}");
    }

    #[test]
    fn rejects_missing_table() {
        let err = error_of(parse_quote! {
            enum Kind {
                #[taxonomy(value = "a")]
                A,
            }
        });
        assert!(err.contains("table"), "{err}");
    }

    #[test]
    fn rejects_tuple_variants() {
        let err = error_of(parse_quote! {
            #[taxonomy(table = "T")]
            enum Kind {
                #[taxonomy(value = "a")]
                A(u8),
            }
        });
        assert!(err.contains("unit variants"), "{err}");
    }

    #[test]
    fn rejects_missing_value() {
        let err = error_of(parse_quote! {
            #[taxonomy(table = "T")]
            enum Kind {
                A,
            }
        });
        assert!(err.contains("missing #[taxonomy(value"), "{err}");
    }

    #[test]
    fn rejects_empty_value() {
        let err = error_of(parse_quote! {
            #[taxonomy(table = "T")]
            enum Kind {
                #[taxonomy(value = "  ")]
                A,
            }
        });
        assert!(err.contains("must not be empty"), "{err}");
    }

    #[test]
    fn rejects_duplicate_values() {
        let err = error_of(parse_quote! {
            #[taxonomy(table = "T")]
            enum Kind {
                #[taxonomy(value = "same")]
                A,
                #[taxonomy(value = "same")]
                B,
            }
        });
        assert!(err.contains("duplicate taxonomy value \"same\""), "{err}");
    }

    #[test]
    fn rejects_duplicate_keys() {
        let err = error_of(parse_quote! {
            #[taxonomy(table = "T")]
            enum Kind {
                #[taxonomy(value = "a")]
                UserType,
                #[taxonomy(value = "b", key = "USER_TYPE")]
                Other,
            }
        });
        assert!(err.contains("duplicate taxonomy key \"USER_TYPE\""), "{err}");
    }

    #[test]
    fn rejects_unknown_attribute() {
        let err = error_of(parse_quote! {
            #[taxonomy(table = "T", label = "x")]
            enum Kind {
                #[taxonomy(value = "a")]
                A,
            }
        });
        assert!(err.contains("unsupported taxonomy attribute"), "{err}");
    }
}
