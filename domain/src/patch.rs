//! Partial updates ("merge the provided fields over the stored record").

/// A set of optional field values that can be merged into a `T`.
pub trait Patch<T> {
    /// Overwrite every field of `target` that this patch provides.
    fn apply_to(self, target: &mut T);
}

/// Declares a patch struct whose fields mirror a subset of the target's
/// fields, each wrapped in `Option`, and implements [`Patch`] for it.
///
/// Nested optional fields become `Option<Option<_>>`; a JSON `null` is read as
/// "not provided", so such fields can be changed but not cleared.
macro_rules! patch_struct {
    (
        $(#[$meta:meta])*
        pub struct $name:ident for $target:ty {
            $($field:ident : $ty:ty),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, ::serde::Deserialize, ::serde::Serialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $name {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $crate::patch::Patch<$target> for $name {
            fn apply_to(self, target: &mut $target) {
                $(
                    if let Some(value) = self.$field {
                        target.$field = value;
                    }
                )*
            }
        }
    };
}

pub(crate) use patch_struct;
