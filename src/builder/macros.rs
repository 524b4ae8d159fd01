//! Macros for ergonomic action declaration.

/// Declare an action enum together with its routing kind.
///
/// Generates the action enum (unit and tuple variants), a fieldless
/// `Kind` enum with one variant per action variant, and the
/// [`Action`](crate::core::Action) implementation linking the two.
///
/// # Example
///
/// ```
/// use cascade_store::action_enum;
/// use cascade_store::core::Action;
///
/// action_enum! {
///     #[derive(PartialEq)]
///     pub enum PaddleAction: PaddleKind {
///         Step(f64),
///         KeyDown(String),
///         Reset,
///     }
/// }
///
/// let action = PaddleAction::Step(1.5);
/// assert_eq!(action.kind(), PaddleKind::Step);
/// assert_eq!(action.name(), "Step");
/// ```
#[macro_export]
macro_rules! action_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $kind:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( ( $($payload:ty),* $(,)? ) )?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant $( ( $($payload),* ) )?
            ),*
        }

        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            $crate::__private::serde::Serialize,
            $crate::__private::serde::Deserialize,
        )]
        #[serde(crate = "cascade_store::__private::serde")]
        $vis enum $kind {
            $($variant),*
        }

        impl $crate::core::Action for $name {
            type Kind = $kind;

            fn kind(&self) -> $kind {
                match self {
                    $(Self::$variant { .. } => $kind::$variant),*
                }
            }

            fn name(&self) -> &str {
                match self {
                    $(Self::$variant { .. } => stringify!($variant)),*
                }
            }
        }
    };
}
