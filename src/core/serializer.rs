//! Animal records to HTML list markup.
//!
//! Each record becomes one `cards__item` block:
//!
//! ```text
//!     <li class="cards__item">
//!         <div class="card__title">Fox</div>
//!         <div class="card__text">
//!             <ul class="card_details">
//!                 <li class="card_detail"><strong>Diet</strong>: Omnivore</li>
//!             </ul>
//!         </div>
//!     </li>
//! ```
//!
//! Values are written verbatim unless escaping is turned on.

use crate::domain::model::{AnimalRecord, Detail};
use maud::Escaper;
use std::borrow::Cow;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSerializer {
    escape: bool,
}

impl HtmlSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_escaping(escape: bool) -> Self {
        Self { escape }
    }

    pub fn serialize(&self, animals: &[AnimalRecord]) -> String {
        let mut output = String::new();
        for animal in animals {
            self.write_card(&mut output, animal);
        }
        output
    }

    fn write_card(&self, output: &mut String, animal: &AnimalRecord) {
        let title = animal.title();

        output.push_str("    <li class=\"cards__item\">\n");
        output.push_str(&format!(
            "        <div class=\"card__title\">{}</div>\n",
            self.text(&title)
        ));
        output.push_str("        <div class=\"card__text\">\n");
        output.push_str("            <ul class=\"card_details\">\n");

        for Detail { label, value } in animal.details() {
            output.push_str(&format!(
                "                <li class=\"card_detail\"><strong>{}</strong>: {}</li>\n",
                label,
                self.text(&value)
            ));
        }

        output.push_str("            </ul>\n");
        output.push_str("        </div>\n");
        output.push_str("    </li>\n");
    }

    /// Applies the escaping setting to user or API supplied text.
    pub fn text<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if self.escape {
            Cow::Owned(escape_html(value))
        } else {
            Cow::Borrowed(value)
        }
    }
}

/// 以預設（不跳脫）方式序列化
pub fn serialize_animals(animals: &[AnimalRecord]) -> String {
    HtmlSerializer::new().serialize(animals)
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    // 寫入 String 不會失敗
    let _ = write!(Escaper::new(&mut escaped), "{}", value);
    escaped
}
