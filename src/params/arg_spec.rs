//! Argument specs: the fixed schema each module validates its params against
//! before anything touches the network.

use crate::{Error, Result};
use serde_json::{Map, Value};

/// Params keys with this prefix are injected by the automation host, not the user.
pub const HOST_PARAM_PREFIX: &str = "_ansible_";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
	Str,
	/// A list of objects, each validated against the nested fields.
	ListOf(&'static [ArgField]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgField {
	pub name: &'static str,
	pub arg_type: ArgType,
	pub required: bool,
	pub aliases: &'static [&'static str],
}

/// Constructors
impl ArgField {
	#[must_use]
	pub const fn required(name: &'static str) -> Self {
		Self {
			name,
			arg_type: ArgType::Str,
			required: true,
			aliases: &[],
		}
	}

	#[must_use]
	pub const fn optional(name: &'static str) -> Self {
		Self {
			name,
			arg_type: ArgType::Str,
			required: false,
			aliases: &[],
		}
	}

	#[must_use]
	pub const fn list_of(name: &'static str, fields: &'static [ArgField]) -> Self {
		Self {
			name,
			arg_type: ArgType::ListOf(fields),
			required: false,
			aliases: &[],
		}
	}

	#[must_use]
	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	fn answers_to(&self, key: &str) -> bool {
		self.name == key || self.aliases.contains(&key)
	}
}

/// Connection params every module accepts on top of its own fields.
pub const CONNECTION_FIELDS: &[ArgField] = &[
	ArgField::optional("region").with_aliases(&["aws_region"]),
	ArgField::optional("profile").with_aliases(&["aws_profile"]),
	ArgField::optional("endpoint_url"),
];

/// The argument spec of one module.
#[derive(Debug, Clone, Copy)]
pub struct ArgumentSpec {
	pub fields: &'static [ArgField],
}

impl ArgumentSpec {
	/// Validate raw module params and return them keyed by canonical field name.
	///
	/// - Aliases are resolved to the field name.
	/// - `null` values count as absent.
	/// - Host keys (`_ansible_*`) are dropped.
	/// - A required field that is absent or empty is an error.
	pub fn validate(&self, params: &Value) -> Result<Map<String, Value>> {
		let params = params.as_object().ok_or(Error::ParamsNotAnObject)?;
		let fields: Vec<&ArgField> = self.fields.iter().chain(CONNECTION_FIELDS).collect();
		validate_object(&fields, params, "", true)
	}
}

// region:    --- Support

fn validate_object(
	fields: &[&ArgField],
	params: &Map<String, Value>,
	path_prefix: &str,
	allow_host_keys: bool,
) -> Result<Map<String, Value>> {
	let mut validated = Map::new();

	for (key, value) in params {
		if allow_host_keys && key.starts_with(HOST_PARAM_PREFIX) {
			continue;
		}
		let field = fields
			.iter()
			.find(|f| f.answers_to(key))
			.ok_or_else(|| Error::ParamUnknown {
				param: format!("{path_prefix}{key}"),
			})?;
		let param_path = format!("{path_prefix}{}", field.name);

		if value.is_null() {
			continue;
		}
		if validated.contains_key(field.name) {
			return Err(Error::ParamInvalidValue {
				param: param_path,
				cause: format!("'{key}' given together with another alias of the same param"),
			});
		}

		let value = match field.arg_type {
			ArgType::Str => match value {
				Value::String(_) => value.clone(),
				_ => return Err(Error::ParamNotString { param: param_path }),
			},
			ArgType::ListOf(item_fields) => {
				let Value::Array(items) = value else {
					return Err(Error::ParamInvalidValue {
						param: param_path,
						cause: "expected a list".to_string(),
					});
				};
				let item_fields: Vec<&ArgField> = item_fields.iter().collect();
				let mut validated_items = Vec::with_capacity(items.len());
				for (idx, item) in items.iter().enumerate() {
					let item_path = format!("{param_path}[{idx}]");
					let Value::Object(item) = item else {
						return Err(Error::ParamInvalidValue {
							param: item_path,
							cause: "expected an object".to_string(),
						});
					};
					let item = validate_object(&item_fields, item, &format!("{item_path}."), false)?;
					validated_items.push(Value::Object(item));
				}
				Value::Array(validated_items)
			}
		};
		validated.insert(field.name.to_string(), value);
	}

	for field in fields.iter().filter(|f| f.required) {
		let present = validated
			.get(field.name)
			.and_then(Value::as_str)
			.is_some_and(|v| !v.is_empty());
		if !present {
			return Err(Error::ParamMissing {
				param: format!("{path_prefix}{}", field.name),
			});
		}
	}

	Ok(validated)
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
