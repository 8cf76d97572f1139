/// Hint prepended to every web search so results stay on topic
pub const SEARCH_TOPIC_PREFIX: &str = "LangGraph Python LangChain Python: ";

pub const ONLINE_INSTRUCTIONS: &str = "You are an expert assistant for LangGraph and LangChain in Python.\n\
Use the web search context (if present) together with your own knowledge.\n\
Prioritize official LangGraph and LangChain concepts and best practices.\n\
Give clear, practical answers with Python code snippets when helpful.";

pub fn build_offline_prompt(question: &str, documentation: &str) -> String {
    format!(
        r#"
Offline mode:

User question:
{}

Offline documentation:
{}

Answer ONLY using the documentation above.
"#,
        question, documentation
    )
}

/// Online prompt; the web section is left out entirely when there is no context.
pub fn build_online_prompt(question: &str, web_context: Option<&str>) -> String {
    match web_context {
        Some(context) => format!(
            "{}\n\n### Web search context\n{}\n\n### Question\n{}\n\n### Answer:",
            ONLINE_INSTRUCTIONS, context, question
        ),
        None => format!("{}\n\nQuestion: {}\n\nAnswer:", ONLINE_INSTRUCTIONS, question),
    }
}
