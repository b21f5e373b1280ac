use syn::Attribute;
use syn::LitStr;
use syn::Path;
use syn::Type;

/// A `#[host(member(name = "...", ty = Type))]` entry.
pub(crate) struct ExtraMember {
    pub name: String,
    pub ty: Type,
}

/// `#[host(...)]` attributes on the deriving type itself.
#[derive(Default)]
pub(crate) struct ContainerAttrs {
    pub extra_members: Vec<ExtraMember>,
    pub implements: Vec<Path>,
    pub path: Option<LitStr>,
}
impl ContainerAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("host")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("path") {
                    result.path = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("implements") {
                    meta.parse_nested_meta(|implemented| {
                        result.implements.push(implemented.path);
                        Ok(())
                    })
                } else if meta.path.is_ident("member") {
                    let mut name = None;
                    let mut ty = None;
                    meta.parse_nested_meta(|member| {
                        if member.path.is_ident("name") {
                            name = Some(member.value()?.parse::<LitStr>()?.value());
                            Ok(())
                        } else if member.path.is_ident("ty") {
                            ty = Some(member.value()?.parse::<Type>()?);
                            Ok(())
                        } else {
                            Err(member.error("expected `name` or `ty`"))
                        }
                    })?;
                    match (name, ty) {
                        (Some(name), Some(ty)) => {
                            result.extra_members.push(ExtraMember { name, ty });
                            Ok(())
                        },
                        _ => Err(meta.error("`member` requires both `name` and `ty`")),
                    }
                } else {
                    Err(meta.error("unsupported `host` attribute"))
                }
            })?;
        }
        Ok(result)
    }
}

/// `#[host(...)]` attributes on a struct field.
#[derive(Default)]
pub(crate) struct FieldAttrs {
    pub opaque: bool,
    pub rename: Option<String>,
    pub skip: bool,
}
impl FieldAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("host")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("opaque") {
                    result.opaque = true;
                } else if meta.path.is_ident("rename") {
                    result.rename = Some(meta.value()?.parse::<LitStr>()?.value());
                } else if meta.path.is_ident("skip") {
                    result.skip = true;
                } else {
                    return Err(meta.error("unsupported `host` field attribute"));
                }
                Ok(())
            })?;
        }
        Ok(result)
    }
}
