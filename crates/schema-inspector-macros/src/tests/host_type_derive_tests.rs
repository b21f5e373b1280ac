use crate::host_type_derive::HostTypeDerive;
use syn::parse_quote;

fn expand(input: syn::DeriveInput) -> syn::Result<String> {
    HostTypeDerive::new(input).expand().map(|tokens| tokens.to_string())
}

fn expand_err(input: syn::DeriveInput) -> String {
    match HostTypeDerive::new(input).expand() {
        Ok(tokens) => panic!("expected an error, got `{tokens}`"),
        Err(err) => err.to_string(),
    }
}

mod structs {
    use super::*;

    #[test]
    fn members_use_lower_camel_case_names() -> syn::Result<()> {
        let expanded = expand(parse_quote! {
            struct Car {
                name: String,
                engine_type: Option<String>,
            }
        })?;

        assert!(expanded.contains("HostType :: concrete"));
        assert!(expanded.contains("\"name\""));
        assert!(expanded.contains("\"engineType\""));
        assert!(!expanded.contains("\"engine_type\""));
        Ok(())
    }

    #[test]
    fn default_path_uses_module_path() -> syn::Result<()> {
        let expanded = expand(parse_quote! {
            struct Bike;
        })?;

        assert!(expanded.contains("module_path"));
        assert!(expanded.contains("\"Bike\""));
        Ok(())
    }

    #[test]
    fn explicit_path_replaces_module_path() -> syn::Result<()> {
        let expanded = expand(parse_quote! {
            #[host(path = "garage::Bike")]
            struct Bike;
        })?;

        assert!(expanded.contains("\"garage::Bike\""));
        assert!(!expanded.contains("module_path"));
        Ok(())
    }

    #[test]
    fn field_attributes() -> syn::Result<()> {
        let expanded = expand(parse_quote! {
            struct Car {
                #[host(rename = "model_name")]
                name: String,
                #[host(skip)]
                vin: String,
                #[host(opaque)]
                extras: serde_json::Value,
            }
        })?;

        assert!(expanded.contains("\"model_name\""));
        assert!(!expanded.contains("\"vin\""));
        assert!(expanded.contains("HostTypeRef :: Opaque"));
        assert!(!expanded.contains("serde_json"));
        Ok(())
    }

    #[test]
    fn implements_and_extra_members() -> syn::Result<()> {
        let expanded = expand(parse_quote! {
            #[host(implements(Vehicle), member(name = "price", ty = i32))]
            struct Car {
                name: String,
            }
        })?;

        assert!(expanded.contains(". implementing"));
        assert!(expanded.contains("< Vehicle as"));
        assert!(expanded.contains("\"price\""));
        assert!(expanded.contains("< i32 as"));
        Ok(())
    }
}

mod enums {
    use super::*;

    #[test]
    fn tuple_variants_are_permitted() -> syn::Result<()> {
        let expanded = expand(parse_quote! {
            enum Vehicle {
                Car(Car),
                Bike(Bike),
                Unknown,
            }
        })?;

        assert!(expanded.contains("HostType :: abstract_type"));
        assert!(expanded.contains("< Car as"));
        assert!(expanded.contains("< Bike as"));
        assert_eq!(expanded.matches(". permitting").count(), 2);
        Ok(())
    }

    #[test]
    fn struct_variants_are_rejected() {
        let err = expand_err(parse_quote! {
            enum Vehicle {
                Car { name: String },
            }
        });

        assert!(err.contains("enum variants must be unit variants"));
    }
}

mod errors {
    use super::*;

    #[test]
    fn generics_are_rejected() {
        let err = expand_err(parse_quote! {
            struct Page<T> {
                items: Vec<T>,
            }
        });

        assert!(err.contains("does not support generic types"));
    }

    #[test]
    fn tuple_structs_are_rejected() {
        let err = expand_err(parse_quote! {
            struct Id(String);
        });

        assert!(err.contains("does not support tuple structs"));
    }

    #[test]
    fn unions_are_rejected() {
        let err = expand_err(parse_quote! {
            union Bits {
                int: u32,
                float: f32,
            }
        });

        assert!(err.contains("does not support unions"));
    }

    #[test]
    fn unknown_attributes_are_rejected() {
        let err = expand_err(parse_quote! {
            #[host(flatten)]
            struct Car;
        });

        assert!(err.contains("unsupported `host` attribute"));
    }

    #[test]
    fn incomplete_extra_member_is_rejected() {
        let err = expand_err(parse_quote! {
            #[host(member(name = "price"))]
            struct Car;
        });

        assert!(err.contains("requires both `name` and `ty`"));
    }
}
