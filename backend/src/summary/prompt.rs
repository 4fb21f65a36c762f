//! Prompt rendering for the todo summary.

use crate::models::Todo;

/// System instruction sent ahead of the user prompt.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that summarizes todo lists in a concise and actionable way.";

/// Render one bullet per todo: `- title` or `- title: description`.
pub fn render_todo_list(todos: &[Todo]) -> String {
    todos
        .iter()
        .map(|todo| {
            if todo.description.is_empty() {
                format!("- {}", todo.title)
            } else {
                format!("- {}: {}", todo.title, todo.description)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the user prompt asking for a grouped, prioritized summary.
pub fn build_prompt(todos: &[Todo]) -> String {
    format!(
        "I have the following pending tasks in my todo list:\n\n\
         {}\n\n\
         Please provide a concise summary of these tasks, grouping related items if possible, \
         and suggest a priority order based on what seems most important. \
         Format the response in a way that would be clear and helpful when shared in a Slack channel.",
        render_todo_list(todos)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(title: &str, description: &str) -> Todo {
        Todo {
            id: title.to_lowercase(),
            title: title.to_string(),
            description: description.to_string(),
            completed: false,
            created_at: "2024-01-01T00:00:00.000000Z".to_string(),
        }
    }

    #[test]
    fn test_render_bullets() {
        let list = render_todo_list(&[todo("A", ""), todo("B", "do B")]);
        assert_eq!(list, "- A\n- B: do B");
    }

    #[test]
    fn test_render_single() {
        assert_eq!(render_todo_list(&[todo("Only", "")]), "- Only");
    }

    #[test]
    fn test_prompt_embeds_list_and_instructions() {
        let prompt = build_prompt(&[todo("A", ""), todo("B", "do B")]);
        assert!(prompt.starts_with("I have the following pending tasks in my todo list:"));
        assert!(prompt.contains("\n- A\n- B: do B\n"));
        assert!(prompt.contains("suggest a priority order"));
        assert!(prompt.contains("Slack channel"));
    }
}
