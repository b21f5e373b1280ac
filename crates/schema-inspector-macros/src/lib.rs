mod host_attrs;
mod host_type_derive;
mod lower_camel_case;

#[cfg(test)]
mod tests;

use crate::host_type_derive::HostTypeDerive;

/// Derives `DescribeHostType` and `DescribeHostTypeRef` for a struct or enum,
/// registering the type's shape with the inspector without any runtime
/// reflection.
///
/// Structs become concrete host types. Each named field becomes a member,
/// with its name converted to lowerCamelCase to match GraphQL field naming.
/// Enums become abstract host types that permit the type wrapped by each of
/// their single-field tuple variants.
///
/// Supported attributes:
///
/// * `#[host(path = "...")]` on the type overrides the host path, which
///   otherwise is `module_path!()` followed by the type's name.
/// * `#[host(implements(Type, ..))]` on a struct lists the abstract host
///   types it implements.
/// * `#[host(member(name = "...", ty = Type))]` on a struct adds a member
///   that isn't a field, such as a computed accessor.
/// * `#[host(rename = "...")]` on a field sets the member name verbatim.
/// * `#[host(skip)]` on a field leaves it out.
/// * `#[host(opaque)]` on a field describes it as an opaque value.
///
/// ```rust
/// use schema_inspector::HostType;
/// use schema_inspector::host::DescribeHostType;
///
/// #[derive(HostType)]
/// #[host(path = "garage::Car")]
/// struct Car {
///     engine_type: String,
///     #[host(skip)]
///     _vin: String,
/// }
///
/// let car = Car::describe_host_type();
/// assert_eq!(car.path(), "garage::Car");
/// assert!(car.member("engineType").is_some());
/// assert!(car.member("vin").is_none());
/// ```
#[proc_macro_derive(HostType, attributes(host))]
pub fn derive_host_type(
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);
    HostTypeDerive::new(input).into()
}
