use std::fmt::Write;

use draftsmith_types::api::ResolvedOptions;

pub const SYSTEM_PROMPT: &str = "You are an expert UI/UX designer and front-end developer.";

const PERSONA: &str = "You are a world-class UI/UX designer who specializes in creating modern, \
visually appealing, and highly usable web interfaces.";

const SECTIONS: &str = "\
Your response should contain the following sections:
1. HTML - Semantic HTML structure with appropriate tags
2. CSS - Clean, well-organized CSS including responsive design
3. JSX - React component version using standard React practices
4. Tailwind - React component using Tailwind CSS classes
5. Suggestions - 5 concise suggestions to improve the design

Format your response as valid JSON with the following structure:
{
  \"html\": \"<!-- Complete HTML code -->\",
  \"css\": \"/* Complete CSS code */\",
  \"jsx\": \"// Complete React JSX code\",
  \"tailwind\": \"// Complete React + Tailwind code\",
  \"suggestions\": [\"suggestion1\", \"suggestion2\", \"suggestion3\", \"suggestion4\", \"suggestion5\"]
}

Make sure all code is complete, properly formatted, and ready to use without modifications.
Ensure the design is modern, clean, and follows current best practices.
";

/// Builds the user instruction sent to the provider.
pub fn build_prompt(user_prompt: &str, options: &ResolvedOptions) -> String {
    let mut out = String::with_capacity(PERSONA.len() + SECTIONS.len() + user_prompt.len() + 256);

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{PERSONA}\n");
    let _ = writeln!(out, "User Request: \"{user_prompt}\"\n");
    let _ = writeln!(
        out,
        "Please design a user interface based on the above request with the following specifications:"
    );
    let _ = writeln!(out, "- Layout Style: {}", options.layout_style);
    let _ = writeln!(out, "- Color Theme: {}", options.color_theme);

    let flags = [
        (options.include_hover_states, "Include hover states"),
        (options.dark_mode_support, "Support dark mode"),
        (options.include_accessibility, "Implement accessibility best practices"),
        (options.include_animations, "Add subtle animations"),
    ];
    for (_, line) in flags.iter().filter(|(on, _)| *on) {
        let _ = writeln!(out, "- {line}");
    }

    let _ = writeln!(out, "- Output Format: {}\n", options.output_format);
    out.push_str(SECTIONS);
    out
}
