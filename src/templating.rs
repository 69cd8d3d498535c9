use std::{collections::HashMap, path::Path};

use tera::{Result, Tera, Value};
use tracing::info;

use crate::post::parse_date;

const LONG_DATE: &str = "%B %-d, %Y";
const SHORT_DATE: &str = "%b %-d, %Y";

/// Reformats a post date; values that are not dates pass through untouched.
fn format_date(value: &Value, format: &str) -> Result<Value> {
    let raw = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("date filters require a string value"))?;
    match parse_date(raw) {
        Some(date) => Ok(tera::to_value(date.format(format).to_string())?),
        None => Ok(value.clone()),
    }
}

/// `"2025-09-15" | long_date` renders as "September 15, 2025".
fn long_date(value: &Value, _: &HashMap<String, Value>) -> Result<Value> {
    format_date(value, LONG_DATE)
}

/// `"2025-09-15" | short_date` renders as "Sep 15, 2025".
fn short_date(value: &Value, _: &HashMap<String, Value>) -> Result<Value> {
    format_date(value, SHORT_DATE)
}

pub fn initialize(template_path: &Path) -> Result<Tera> {
    let templates = format!("{}/**/*.html", template_path.display());
    info!("initialize templates: {}", templates);
    let mut tera = Tera::new(&templates)?;

    tera.register_filter("long_date", long_date);
    tera.register_filter("short_date", short_date);

    info!("template initialization complete");
    Ok(tera)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tera::Context;

    use super::*;

    #[test]
    fn date_filters() {
        let date = Value::from("2025-09-15");
        let none = HashMap::new();
        assert_eq!(long_date(&date, &none).unwrap(), Value::from("September 15, 2025"));
        assert_eq!(short_date(&date, &none).unwrap(), Value::from("Sep 15, 2025"));

        let unknown = Value::from("Unknown date");
        assert_eq!(long_date(&unknown, &none).unwrap(), unknown);
        assert!(short_date(&Value::from(3), &none).is_err());
    }

    #[test]
    fn project_templates_load() {
        let tera = initialize(Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates"))).unwrap();
        let names: Vec<&str> = tera.get_template_names().collect();
        for name in ["base.html", "index.html", "blogs.html", "blog-detail.html", "dashboard.html"] {
            assert!(names.contains(&name), "missing template {name}");
        }
    }

    #[test]
    fn filters_are_registered() {
        let mut tera = Tera::default();
        tera.register_filter("long_date", long_date);
        tera.add_raw_template("t", "{{ date | long_date }}").unwrap();
        let mut context = Context::new();
        context.insert("date", "2025-08-01T09:00:00Z");
        assert_eq!(tera.render("t", &context).unwrap(), "August 1, 2025");
    }
}
