use crate::bounds::BoundsTracker;
use crate::config::build::build_tracker;
use crate::config::choices::{TrackerChoice, TrackerKind};
use anyhow::{Context, Result, anyhow};
use serde_json::{Map, Value};
use strum::{EnumMessage, IntoEnumIterator};

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Number,
    Boolean,
    /// One of a fixed set of string values, e.g. a [`RateMode`](crate::bounds::RateMode).
    Choice(Vec<String>),
}

/// A tunable parameter of one tracker kind, read from its JSON schema.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub required: bool,
    pub kind: FieldKind,
    pub default: Option<Value>,
    pub min: Option<f64>,
}

pub fn parse_choice(json: &str) -> Result<TrackerChoice> {
    serde_json::from_str(json).context("invalid bounds tracker configuration")
}

pub fn tracker_from_json(json: &str) -> Result<Box<dyn BoundsTracker>> {
    let choice = parse_choice(json)?;
    let kind = choice.kind();
    build_tracker(choice).with_context(|| format!("cannot build {kind} tracker"))
}

/// `(type tag, label)` for every tracker kind, in declaration order.
pub fn available_kinds() -> Vec<(&'static str, &'static str)> {
    TrackerKind::iter()
        .map(|k| (k.into(), k.get_message().unwrap_or_default()))
        .collect()
}

pub fn param_fields(kind: TrackerKind) -> Result<Vec<FieldSpec>> {
    let schema = TrackerChoice::schema();
    let root = schema
        .as_object()
        .context("tracker schema is not an object")?;
    let tag: &'static str = kind.into();

    let branches = root
        .get("oneOf")
        .or_else(|| root.get("anyOf"))
        .and_then(Value::as_array)
        .context("tracker schema has no variants")?;

    let params = branches
        .iter()
        .filter_map(|b| b.get("properties").and_then(Value::as_object))
        .find(|props| tag_matches(props, tag))
        .and_then(|props| props.get("params"))
        .and_then(Value::as_object)
        .ok_or_else(|| anyhow!("no schema branch for '{tag}'"))?;
    let params = resolve_ref(root, params).with_context(|| format!("unresolved params for '{tag}'"))?;

    let Some(props) = params.get("properties").and_then(Value::as_object) else {
        return Ok(vec![]);
    };
    let required: Vec<&str> = params
        .get("required")
        .and_then(Value::as_array)
        .map(|a| a.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut out = Vec::with_capacity(props.len());
    for (name, field) in props {
        let field = field
            .as_object()
            .with_context(|| format!("field '{name}' is not an object"))?;
        let Some(kind) = field_kind(root, field) else {
            continue;
        };
        out.push(FieldSpec {
            name: name.clone(),
            title: field
                .get("title")
                .and_then(Value::as_str)
                .unwrap_or(name)
                .to_string(),
            description: field
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string),
            required: required.contains(&name.as_str()),
            kind,
            default: field.get("default").cloned(),
            min: field.get("minimum").and_then(Value::as_f64),
        });
    }
    Ok(out)
}

fn tag_matches(props: &Map<String, Value>, tag: &str) -> bool {
    let Some(t) = props.get("type") else {
        return false;
    };
    if t.get("const").and_then(Value::as_str) == Some(tag) {
        return true;
    }
    t.get("enum")
        .and_then(Value::as_array)
        .is_some_and(|vals| vals.iter().any(|v| v.as_str() == Some(tag)))
}

/// Follows a local `#/$defs/...` reference; objects without one are returned as is.
fn resolve_ref<'a>(
    root: &'a Map<String, Value>,
    obj: &'a Map<String, Value>,
) -> Option<&'a Map<String, Value>> {
    let target = obj
        .get("$ref")
        .or_else(|| {
            obj.get("allOf")
                .and_then(Value::as_array)
                .and_then(|a| a.first())
                .and_then(|v| v.get("$ref"))
        })
        .and_then(Value::as_str);

    let Some(r) = target else {
        return Some(obj);
    };
    let mut cur = root;
    for seg in r.strip_prefix("#/")?.split('/') {
        cur = cur.get(seg)?.as_object()?;
    }
    Some(cur)
}

fn field_kind(root: &Map<String, Value>, field: &Map<String, Value>) -> Option<FieldKind> {
    let field = resolve_ref(root, field)?;

    let options: Vec<String> = if let Some(vals) = field.get("enum").and_then(Value::as_array) {
        vals.iter().filter_map(Value::as_str).map(str::to_string).collect()
    } else if let Some(alts) = field.get("oneOf").and_then(Value::as_array) {
        alts.iter()
            .filter_map(|a| a.get("const").or_else(|| a.get("enum")?.get(0)))
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    } else {
        vec![]
    };
    if !options.is_empty() {
        return Some(FieldKind::Choice(options));
    }

    let types: Vec<&str> = match field.get("type") {
        Some(Value::String(s)) => vec![s.as_str()],
        Some(Value::Array(a)) => a.iter().filter_map(Value::as_str).collect(),
        _ => vec![],
    };
    types.into_iter().find_map(|t| match t {
        "number" | "integer" => Some(FieldKind::Number),
        "boolean" => Some(FieldKind::Boolean),
        _ => None,
    })
}
