use crate::domain::node::Node;
use crate::domain::ports::PageSerializer;
use crate::utils::error::Result;

/// Pretty JSON dump of the render tree; a closed render gate is `null`.
#[derive(Debug, Clone, Default)]
pub struct JsonSerializer;

impl PageSerializer for JsonSerializer {
    fn serialize(&self, page: Option<&Node>) -> Result<String> {
        Ok(serde_json::to_string_pretty(&page)?)
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_gate_is_null() {
        assert_eq!(JsonSerializer.serialize(None).unwrap(), "null");
    }

    #[test]
    fn test_node_shape() {
        let page = Node::with_text("h1", "Hi").class("title");
        let value: serde_json::Value =
            serde_json::from_str(&JsonSerializer.serialize(Some(&page)).unwrap()).unwrap();

        assert_eq!(value["type"], "element");
        assert_eq!(value["tag"], "h1");
        assert_eq!(value["attrs"][0][0], "class");
        assert_eq!(value["children"][0]["type"], "text");
        assert_eq!(value["children"][0]["text"], "Hi");
    }
}
