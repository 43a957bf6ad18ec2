use crate::fragment::{RenderedFragment, Requirement};
use crate::kinds::root_open;
use crate::normalize::normalize;
use crate::registry::{RenderError, RenderInput, RenderRule};
use crate::style::StyleMap;
use pagesmith_common::escape;
use pagesmith_model::props::{FormField, FormFieldType, FormProps};
use serde::Serialize;

/// Submission config serialized onto the form for the form-submit runtime.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FormOptions<'a> {
    endpoint: &'a str,
    redirect: Option<&'a str>,
}

pub struct FormRule;

impl RenderRule for FormRule {
    fn kind(&self) -> &'static str {
        "form"
    }

    fn render(&self, input: &RenderInput) -> Result<RenderedFragment, RenderError> {
        let props: FormProps = normalize(self.kind(), input.props)?;
        if props.fields.is_empty() {
            return Ok(RenderedFragment::comment(&format!(
                "form \"{}\" has no fields",
                input.id
            )));
        }

        let endpoint = props
            .action
            .unwrap_or_else(|| format!("/api/pages/{}/submissions", input.page_id));
        let options = FormOptions {
            endpoint: &endpoint,
            redirect: props.redirect.as_deref(),
        };
        let options_json = serde_json::to_string(&options).map_err(|source| {
            RenderError::Options {
                kind: self.kind(),
                source,
            }
        })?;

        let mut html = root_open("form", input, self.kind(), "pgs-form", &StyleMap::new());
        html.push_str(&format!(
            " action=\"{}\" method=\"post\" data-form-options=\"{}\">",
            escape::attr(&endpoint),
            escape::attr(&options_json)
        ));

        for field in &props.fields {
            html.push_str(&render_field(field));
        }

        let submit_label = props.submit_label.as_deref().unwrap_or("Submit");
        html.push_str(&format!(
            "<button class=\"pgs-form__submit\" type=\"submit\">{}</button></form>",
            escape::html(submit_label)
        ));
        Ok(RenderedFragment::html(html).with_requirement(Requirement::Form))
    }
}

fn render_field(field: &FormField) -> String {
    let label = field.label.as_deref().unwrap_or(&field.name);
    let required = if field.required { " required" } else { "" };
    let placeholder = field
        .placeholder
        .as_deref()
        .map(|p| format!(" placeholder=\"{}\"", escape::attr(p)))
        .unwrap_or_default();

    let control = match field.field_type {
        FormFieldType::Textarea => format!(
            "<textarea name=\"{}\"{}{}></textarea>",
            escape::attr(&field.name),
            placeholder,
            required
        ),
        FormFieldType::Checkbox => format!(
            "<input type=\"checkbox\" name=\"{}\"{}>",
            escape::attr(&field.name),
            required
        ),
        other => format!(
            "<input type=\"{}\" name=\"{}\"{}{}>",
            input_type(other),
            escape::attr(&field.name),
            placeholder,
            required
        ),
    };

    format!(
        "<label class=\"pgs-form__field\"><span class=\"pgs-form__label\">{}</span>{}</label>",
        escape::html(label),
        control
    )
}

fn input_type(field_type: FormFieldType) -> &'static str {
    match field_type {
        FormFieldType::Text => "text",
        FormFieldType::Email => "email",
        FormFieldType::Phone => "tel",
        FormFieldType::Number => "number",
        // Handled separately above.
        FormFieldType::Textarea | FormFieldType::Checkbox => "text",
    }
}
