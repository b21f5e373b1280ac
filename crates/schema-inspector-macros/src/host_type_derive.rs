use crate::host_attrs::ContainerAttrs;
use crate::host_attrs::FieldAttrs;
use crate::lower_camel_case::lower_camel_case;
use quote::quote;
use syn::Data;
use syn::DataEnum;
use syn::DeriveInput;
use syn::Fields;
use syn::spanned::Spanned;

pub(crate) struct HostTypeDerive(DeriveInput);
impl HostTypeDerive {
    pub fn new(input: DeriveInput) -> Self {
        Self(input)
    }

    pub fn expand(&self) -> syn::Result<proc_macro2::TokenStream> {
        let input = &self.0;
        if !input.generics.params.is_empty() {
            return Err(syn::Error::new(
                input.generics.span(),
                "`#[derive(HostType)]` does not support generic types",
            ));
        }

        let attrs = ContainerAttrs::parse(&input.attrs)?;
        let name = &input.ident;
        let path = match &attrs.path {
            Some(path) => quote! { #path },
            None => {
                let name_str = name.to_string();
                quote! { ::core::concat!(::core::module_path!(), "::", #name_str) }
            },
        };

        let constructor = match &input.data {
            Data::Struct(data) => {
                let members = struct_members(&data.fields)?;
                quote! {
                    ::schema_inspector::host::HostType::concrete(#path)
                        #(#members)*
                }
            },
            Data::Enum(data) => {
                let permitted = permitted_types(data)?;
                quote! {
                    ::schema_inspector::host::HostType::abstract_type(#path)
                        #(.permitting(
                            <#permitted as ::schema_inspector::host::DescribeHostTypeRef>
                                ::describe_host_type_ref()
                                .path()
                                .unwrap_or_default()
                        ))*
                }
            },
            Data::Union(data) => return Err(syn::Error::new(
                data.union_token.span(),
                "`#[derive(HostType)]` does not support unions",
            )),
        };

        let extra_members = attrs.extra_members.iter().map(|member| {
            let member_name = &member.name;
            let ty = &member.ty;
            quote! {
                .with_member(
                    #member_name,
                    <#ty as ::schema_inspector::host::DescribeHostTypeRef>::describe_host_type_ref(),
                )
            }
        });
        let implements = &attrs.implements;

        Ok(quote! {
            impl ::schema_inspector::host::DescribeHostType for #name {
                fn describe_host_type() -> ::schema_inspector::host::HostType {
                    #constructor
                        #(#extra_members)*
                        #(.implementing(
                            <#implements as ::schema_inspector::host::DescribeHostTypeRef>
                                ::describe_host_type_ref()
                                .path()
                                .unwrap_or_default()
                        ))*
                }
            }

            impl ::schema_inspector::host::DescribeHostTypeRef for #name {
                fn describe_host_type_ref() -> ::schema_inspector::host::HostTypeRef {
                    ::schema_inspector::host::HostTypeRef::named(#path)
                }
            }
        })
    }
}

impl std::convert::From<HostTypeDerive> for proc_macro::TokenStream {
    fn from(val: HostTypeDerive) -> Self {
        match val.expand() {
            Ok(tokens) => tokens.into(),
            Err(err) => err.to_compile_error().into(),
        }
    }
}

/// The types wrapped by an enum's single-field tuple variants. Unit variants
/// don't name a host type and are ignored.
fn permitted_types(data: &DataEnum) -> syn::Result<Vec<&syn::Type>> {
    let mut permitted = vec![];
    for variant in &data.variants {
        match &variant.fields {
            Fields::Unit => (),
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 =>
                permitted.push(&fields.unnamed[0].ty),
            _ => return Err(syn::Error::new(
                variant.span(),
                "`#[derive(HostType)]` enum variants must be unit variants or wrap \
                exactly one type",
            )),
        }
    }
    Ok(permitted)
}

fn struct_members(fields: &Fields) -> syn::Result<Vec<proc_macro2::TokenStream>> {
    let fields = match fields {
        Fields::Named(fields) => &fields.named,
        Fields::Unit => return Ok(vec![]),
        Fields::Unnamed(fields) => return Err(syn::Error::new(
            fields.span(),
            "`#[derive(HostType)]` does not support tuple structs",
        )),
    };

    let mut members = vec![];
    for field in fields {
        let field_attrs = FieldAttrs::parse(&field.attrs)?;
        if field_attrs.skip {
            continue;
        }

        let Some(ident) = &field.ident else {
            continue;
        };
        let member_name = field_attrs.rename
            .unwrap_or_else(|| lower_camel_case(ident.to_string().as_str()));
        let ty = &field.ty;
        let type_ref =
            if field_attrs.opaque {
                quote! { ::schema_inspector::host::HostTypeRef::Opaque }
            } else {
                quote! {
                    <#ty as ::schema_inspector::host::DescribeHostTypeRef>::describe_host_type_ref()
                }
            };
        members.push(quote! { .with_member(#member_name, #type_ref) });
    }
    Ok(members)
}
