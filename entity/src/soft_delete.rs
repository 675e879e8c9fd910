use sea_orm::EntityTrait;

/// Entities whose rows are hidden by stamping a `deleted_at` column instead of
/// being removed.
pub trait SoftDelete: EntityTrait {
    /// Column holding the deletion timestamp; `NULL` means the row is live.
    fn deleted_at_column() -> Self::Column;

    /// Insertion timestamp, used as the default listing order.
    fn created_at_column() -> Self::Column;

    /// Columns unique among live rows only.
    ///
    /// The schema backs each with a partial unique index (`WHERE deleted_at IS NULL`)
    /// so a soft-deleted row releases its value.
    fn live_unique_columns() -> Vec<Self::Column> {
        Vec::new()
    }
}

/// Implements [`SoftDelete`] for an entity module exposing `Column::DeletedAt`
/// and `Column::CreatedAt`, optionally listing its live-unique columns.
#[macro_export]
macro_rules! impl_soft_delete {
    ($module:ident) => {
        $crate::impl_soft_delete!($module, unique = []);
    };
    ($module:ident, unique = [$($column:ident),*]) => {
        impl $crate::soft_delete::SoftDelete for $crate::$module::Entity {
            fn deleted_at_column() -> $crate::$module::Column {
                $crate::$module::Column::DeletedAt
            }

            fn created_at_column() -> $crate::$module::Column {
                $crate::$module::Column::CreatedAt
            }

            fn live_unique_columns() -> Vec<$crate::$module::Column> {
                vec![$($crate::$module::Column::$column),*]
            }
        }
    };
}
