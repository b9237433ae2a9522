pub const PLACEHOLDER: &str = "__REPLACE_ANIMALS_INFO__";

/// 將模板中所有的佔位符替換為 fragment；沒有佔位符時原樣返回
pub fn compose(template: &str, fragment: &str) -> String {
    template.replace(PLACEHOLDER, fragment)
}

pub fn contains_placeholder(template: &str) -> bool {
    template.contains(PLACEHOLDER)
}

pub fn not_found_message(name: &str) -> String {
    format!("<h2>The animal \"{}\" does not exist.</h2>", name)
}
