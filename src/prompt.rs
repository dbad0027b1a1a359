use crate::types::Style;

/// Builds the generation prompt for a style and topic. The topic is used
/// as given; callers trim before submitting.
pub fn build_prompt(style: Style, topic: &str) -> String {
    format!(
        "Write {} style rap lyrics about: {}. \
         Make it creative, with strong rhymes and flow. \
         Include a hook/chorus and verses. \
         Format with proper line breaks between sections.",
        style.as_str(),
        topic
    )
}
