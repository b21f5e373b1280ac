use crate::host::HostType;
use crate::host::HostTypeRef;

/// Types that can describe themselves as a [`HostType`].
///
/// Usually implemented via `#[derive(HostType)]`.
pub trait DescribeHostType {
    fn describe_host_type() -> HostType;
}

/// Types that can describe how they are referred to from a signature.
///
/// Every type deriving `HostType` implements this as a reference to its own
/// path. Implementations are also provided for the primitive types and for
/// the standard containers, so that members like `Vec<Option<Box<Book>>>`
/// can be described without any help.
pub trait DescribeHostTypeRef {
    fn describe_host_type_ref() -> HostTypeRef;
}

macro_rules! describe_named {
    ($($ty:ty => $path:literal),* $(,)?) => {
        $(
            impl DescribeHostTypeRef for $ty {
                fn describe_host_type_ref() -> HostTypeRef {
                    HostTypeRef::named($path)
                }
            }
        )*
    };
}

describe_named! {
    bool => "bool",
    char => "char",
    f32 => "f32",
    f64 => "f64",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    isize => "isize",
    str => "str",
    String => "String",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    u128 => "u128",
    usize => "usize",
}

impl<T: DescribeHostTypeRef + ?Sized> DescribeHostTypeRef for &T {
    fn describe_host_type_ref() -> HostTypeRef {
        T::describe_host_type_ref()
    }
}

impl<T: DescribeHostTypeRef> DescribeHostTypeRef for [T] {
    fn describe_host_type_ref() -> HostTypeRef {
        HostTypeRef::list(T::describe_host_type_ref())
    }
}

impl<T: DescribeHostTypeRef> DescribeHostTypeRef for Vec<T> {
    fn describe_host_type_ref() -> HostTypeRef {
        HostTypeRef::list(T::describe_host_type_ref())
    }
}

impl<T: DescribeHostTypeRef> DescribeHostTypeRef for Option<T> {
    fn describe_host_type_ref() -> HostTypeRef {
        HostTypeRef::optional(T::describe_host_type_ref())
    }
}

impl<T: DescribeHostTypeRef + ?Sized> DescribeHostTypeRef for Box<T> {
    fn describe_host_type_ref() -> HostTypeRef {
        HostTypeRef::generic("Box", [T::describe_host_type_ref()])
    }
}

impl<T: DescribeHostTypeRef + ?Sized> DescribeHostTypeRef for std::rc::Rc<T> {
    fn describe_host_type_ref() -> HostTypeRef {
        HostTypeRef::generic("Rc", [T::describe_host_type_ref()])
    }
}

impl<T: DescribeHostTypeRef + ?Sized> DescribeHostTypeRef for std::sync::Arc<T> {
    fn describe_host_type_ref() -> HostTypeRef {
        HostTypeRef::generic("Arc", [T::describe_host_type_ref()])
    }
}

impl<T: DescribeHostTypeRef, E> DescribeHostTypeRef for Result<T, E> {
    fn describe_host_type_ref() -> HostTypeRef {
        HostTypeRef::generic("Result", [T::describe_host_type_ref()])
    }
}
