//! Binding of untyped configuration sections onto typed configuration objects.
//!
//! Every validator declares a plain configuration record. The binder walks the
//! validator's section of the configuration document and assigns each key to
//! the matching field of that record:
//!
//! - scalars are converted to the field's scalar type ([`FromScalar`])
//! - nested mappings are bound onto a fresh instance of a record field
//! - sequences of mappings produce one new element per item, in order
//! - unknown keys and shape mismatches fail with a [`BindError`] naming the
//!   offending key path (`key` or `key[index].subkey`)
//!
//! Binding code is written per type, usually through the [`bindable!`] macro,
//! which maps each configuration key to a field and a field kind.
//!
//! # Parent defaults
//!
//! A sequence element sometimes needs a default declared on its parent (for
//! example a shared prefix inherited by every list item). After all keys of a
//! record are bound, [`Bindable::after_bind`] runs on that record; the parent
//! uses it to push its defaults into elements that did not set their own.
//!
//! # Example
//!
//! ```
//! use rdflint::bind::bind;
//! use rdflint::bindable;
//! use rdflint::config::ConfigNode;
//!
//! #[derive(Default)]
//! struct Item {
//!     url: String,
//! }
//!
//! #[derive(Default)]
//! struct DemoConfig {
//!     enable: String,
//!     items: Vec<Item>,
//! }
//!
//! bindable!(Item { "url" => url: scalar });
//! bindable!(DemoConfig {
//!     "enable" => enable: scalar,
//!     "items" => items: records,
//! });
//!
//! let section = ConfigNode::parse("enable: 'true'\nitems:\n  - url: u1\n  - url: u2").unwrap();
//! let mut config = DemoConfig::default();
//! bind(&section, &mut config).unwrap();
//!
//! assert_eq!(config.enable, "true");
//! assert_eq!(config.items.len(), 2);
//! assert_eq!(config.items[1].url, "u2");
//! ```

mod path;
mod scalar;

pub use path::{BindError, KeyPath};
pub use scalar::FromScalar;

use crate::config::ConfigNode;

/// A configuration record that can be populated from a configuration mapping.
pub trait Bindable {
    /// Assign `value` to the field configured under `key`.
    ///
    /// `path` already includes `key`. Implementations return
    /// [`BindError::UnknownKey`] for keys they do not declare.
    fn bind_field(&mut self, key: &str, value: &ConfigNode, path: &KeyPath)
        -> Result<(), BindError>;

    /// Called once every key of this record has been bound.
    fn after_bind(&mut self) {}
}

/// Bind a configuration section onto `target`, mutating it in place.
///
/// The section must be a mapping (or empty). Keys are bound in document
/// order; binding stops at the first error.
pub fn bind<T: Bindable + ?Sized>(section: &ConfigNode, target: &mut T) -> Result<(), BindError> {
    bind_at(section, target, &KeyPath::root())
}

/// Bind a mapping found at `path` onto `target`.
pub fn bind_at<T: Bindable + ?Sized>(
    section: &ConfigNode,
    target: &mut T,
    path: &KeyPath,
) -> Result<(), BindError> {
    match section {
        ConfigNode::Mapping(entries) => {
            for (key, value) in entries {
                let field_path = path.key(key.as_str());
                tracing::trace!("binding {}", field_path);
                target.bind_field(key, value, &field_path)?;
            }
        }
        ConfigNode::Null => {}
        other => return Err(BindError::mismatch(path, "mapping", other.kind())),
    }
    target.after_bind();
    Ok(())
}

/// Assign a scalar field.
pub fn scalar<T: FromScalar>(
    slot: &mut T,
    value: &ConfigNode,
    path: &KeyPath,
) -> Result<(), BindError> {
    *slot = convert(value, path)?;
    Ok(())
}

fn convert<T: FromScalar>(value: &ConfigNode, path: &KeyPath) -> Result<T, BindError> {
    match value {
        ConfigNode::Scalar(text) => T::from_scalar(text)
            .map_err(|reason| BindError::invalid_scalar(path, text, T::EXPECTED, reason)),
        ConfigNode::Null => {
            T::from_null().ok_or_else(|| BindError::mismatch(path, T::EXPECTED, "null"))
        }
        other => Err(BindError::mismatch(path, T::EXPECTED, other.kind())),
    }
}

/// Assign a nested record field from a mapping.
///
/// The mapping is bound onto a freshly constructed instance, which then
/// replaces the field's previous value.
pub fn record<T: Bindable + Default>(
    slot: &mut T,
    value: &ConfigNode,
    path: &KeyPath,
) -> Result<(), BindError> {
    if !matches!(value, ConfigNode::Mapping(_) | ConfigNode::Null) {
        return Err(BindError::mismatch(path, "mapping", value.kind()));
    }
    let mut fresh = T::default();
    bind_at(value, &mut fresh, path)?;
    *slot = fresh;
    Ok(())
}

/// Assign an optional nested record field. An empty value clears it.
pub fn optional_record<T: Bindable + Default>(
    slot: &mut Option<T>,
    value: &ConfigNode,
    path: &KeyPath,
) -> Result<(), BindError> {
    if value.is_null() {
        *slot = None;
        return Ok(());
    }
    let mut fresh = T::default();
    record(&mut fresh, value, path)?;
    *slot = Some(fresh);
    Ok(())
}

/// Assign a sequence-of-records field.
///
/// One element is constructed per sequence item, in input order. Mapping
/// items are bound onto their element; empty items leave it at its default.
pub fn records<T: Bindable + Default>(
    slot: &mut Vec<T>,
    value: &ConfigNode,
    path: &KeyPath,
) -> Result<(), BindError> {
    let items: &[ConfigNode] = match value {
        ConfigNode::Sequence(items) => items,
        ConfigNode::Null => &[],
        other => return Err(BindError::mismatch(path, "sequence", other.kind())),
    };

    let mut bound = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let item_path = path.index(index);
        let mut element = T::default();
        match item {
            ConfigNode::Mapping(_) | ConfigNode::Null => bind_at(item, &mut element, &item_path)?,
            other => return Err(BindError::mismatch(&item_path, "mapping", other.kind())),
        }
        bound.push(element);
    }
    *slot = bound;
    Ok(())
}

/// Assign a sequence-of-scalars field.
pub fn scalars<T: FromScalar>(
    slot: &mut Vec<T>,
    value: &ConfigNode,
    path: &KeyPath,
) -> Result<(), BindError> {
    let items: &[ConfigNode] = match value {
        ConfigNode::Sequence(items) => items,
        ConfigNode::Null => &[],
        other => return Err(BindError::mismatch(path, "sequence", other.kind())),
    };

    *slot = items
        .iter()
        .enumerate()
        .map(|(index, item)| convert(item, &path.index(index)))
        .collect::<Result<_, _>>()?;
    Ok(())
}

/// Implement [`Bindable`] for a configuration record.
///
/// Each entry maps a configuration key to a field and the binder function
/// for that field's kind: `scalar`, `record`, `optional_record`, `records`
/// or `scalars`. An optional `after_bind(this) { ... }` block runs once all
/// keys are bound.
///
/// ```
/// use rdflint::bindable;
///
/// #[derive(Default)]
/// struct Prefix {
///     url: String,
///     starts_with: Option<String>,
/// }
///
/// #[derive(Default)]
/// struct PrefixesConfig {
///     starts_with: String,
///     prefixes: Vec<Prefix>,
/// }
///
/// bindable!(Prefix {
///     "url" => url: scalar,
///     "startswith" => starts_with: scalar,
/// });
///
/// bindable!(PrefixesConfig {
///     "startswith" => starts_with: scalar,
///     "prefixes" => prefixes: records,
/// } after_bind(this) {
///     for prefix in &mut this.prefixes {
///         if prefix.starts_with.is_none() {
///             prefix.starts_with = Some(this.starts_with.clone());
///         }
///     }
/// });
/// ```
#[macro_export]
macro_rules! bindable {
    (
        $ty:ty { $($key:literal => $field:ident : $kind:ident),* $(,)? }
        $(after_bind($this:ident) $body:block)?
    ) => {
        impl $crate::bind::Bindable for $ty {
            fn bind_field(
                &mut self,
                key: &str,
                value: &$crate::config::ConfigNode,
                path: &$crate::bind::KeyPath,
            ) -> ::std::result::Result<(), $crate::bind::BindError> {
                let _ = value;
                match key {
                    $($key => $crate::bind::$kind(&mut self.$field, value, path),)*
                    _ => ::std::result::Result::Err($crate::bind::BindError::unknown_key(path)),
                }
            }

            $(
                fn after_bind(&mut self) {
                    let $this = self;
                    $body
                }
            )?
        }
    };
}
