//! Instruction template sent upstream.
//!
//! The literal text, including the JSON shape example and the closing
//! directive, is what makes the parser's fixed-path extraction valid. Keep it
//! byte-for-byte; the user's query is interpolated verbatim.

const TEMPLATE_HEAD: &str = "You are a research assistant specializing in helping students develop thesis and capstone project ideas.

USER REQUEST: ";

const TEMPLATE_TAIL: &str = "

Based on this request, generate compelling titles and brief overview for their research paper or thesis.

Return your response in this exact JSON format:
[
{
\"title\": \"A clear, academic title that accurately represents the research topic\",
\"briefOverview\": \"A 2-3 sentence overview explaining the focus and potential significance of the research\"
},
{
\"title\": \"A clear, academic title that accurately represents the research topic\",
\"briefOverview\": \"A 2-3 sentence overview explaining the focus and potential significance of the research\"
}
]

Do not include any other text, explanations, or formatting in your response - only return the JSON object.";

/// Render the full instruction for `user_input`.
#[must_use]
pub fn render(user_input: &str) -> String {
    let mut text = String::with_capacity(TEMPLATE_HEAD.len() + user_input.len() + TEMPLATE_TAIL.len());
    text.push_str(TEMPLATE_HEAD);
    text.push_str(user_input);
    text.push_str(TEMPLATE_TAIL);
    text
}

#[cfg(test)]
#[path = "prompt_test.rs"]
mod tests;
