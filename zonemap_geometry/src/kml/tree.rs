use anyhow::{Context, Result, anyhow, ensure};
use quick_xml::{Reader, events::BytesStart, events::Event};

/// A parsed XML element. Names are stored without namespace prefix.
#[derive(Debug, Default)]
pub(crate) struct Element {
	pub name: String,
	pub attributes: Vec<(String, String)>,
	pub children: Vec<Element>,
	pub text: String,
}

impl Element {
	fn from_start(start: &BytesStart) -> Result<Self> {
		let mut attributes = Vec::new();
		for attribute in start.attributes() {
			let attribute = attribute?;
			let key = String::from_utf8_lossy(attribute.key.local_name().as_ref()).to_string();
			attributes.push((key, attribute.unescape_value()?.to_string()));
		}
		Ok(Element {
			name: String::from_utf8_lossy(start.local_name().as_ref()).to_string(),
			attributes,
			..Element::default()
		})
	}

	pub fn attribute(&self, key: &str) -> Option<&str> {
		self
			.attributes
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}

	pub fn child(&self, name: &str) -> Option<&Element> {
		self.children.iter().find(|c| c.name == name)
	}

	pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
		self.children.iter().filter(move |c| c.name == name)
	}

	/// Trimmed text of the named child, if present and not blank.
	pub fn child_text(&self, name: &str) -> Option<&str> {
		self.child(name).map(|c| c.text.trim()).filter(|t| !t.is_empty())
	}
}

/// Reads a whole XML document and returns its root element.
pub(crate) fn parse_tree(xml: &str) -> Result<Element> {
	let mut reader = Reader::from_str(xml);
	reader.config_mut().trim_text(true);

	let mut stack: Vec<Element> = vec![Element {
		name: String::from("#document"),
		..Element::default()
	}];

	loop {
		let position = reader.buffer_position();
		let event = reader
			.read_event()
			.with_context(|| format!("malformed XML near byte {position}"))?;

		match event {
			Event::Start(start) => stack.push(Element::from_start(&start)?),
			Event::Empty(start) => {
				let element = Element::from_start(&start)?;
				current(&mut stack)?.children.push(element);
			}
			Event::End(_) => {
				let element = stack.pop().ok_or(anyhow!("unbalanced end tag"))?;
				ensure!(!stack.is_empty(), "unbalanced end tag </{}>", element.name);
				current(&mut stack)?.children.push(element);
			}
			Event::Text(text) => current(&mut stack)?.text.push_str(&text.unescape()?),
			Event::CData(data) => current(&mut stack)?.text.push_str(&String::from_utf8_lossy(&data)),
			Event::Eof => break,
			_ => {}
		}
	}

	ensure!(
		stack.len() == 1,
		"unexpected end of document inside <{}>",
		stack.last().map_or("?", |e| e.name.as_str())
	);
	let mut document = stack.pop().ok_or(anyhow!("empty document"))?;
	ensure!(document.children.len() == 1, "XML document must have exactly one root element");
	document.children.pop().ok_or(anyhow!("empty document"))
}

fn current(stack: &mut [Element]) -> Result<&mut Element> {
	stack.last_mut().ok_or(anyhow!("unbalanced XML"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builds_tree() -> Result<()> {
		let root = parse_tree(
			r#"<?xml version="1.0"?><kml:kml xmlns:kml="http://www.opengis.net/kml/2.2"><a x="1">hi &amp; bye</a><b/><![CDATA[<raw>]]></kml:kml>"#,
		)?;
		assert_eq!(root.name, "kml");
		assert_eq!(root.children.len(), 2);
		assert_eq!(root.child("a").unwrap().attribute("x"), Some("1"));
		assert_eq!(root.child_text("a"), Some("hi & bye"));
		assert!(root.child("b").unwrap().children.is_empty());
		assert_eq!(root.text, "<raw>");
		Ok(())
	}

	#[test]
	fn rejects_unclosed_elements() {
		assert!(parse_tree("<kml><Document>").is_err());
	}

	#[test]
	fn rejects_mismatched_tags() {
		assert!(parse_tree("<kml><a></b></kml>").is_err());
	}

	#[test]
	fn rejects_multiple_roots() {
		assert!(parse_tree("<a/><b/>").is_err());
		assert!(parse_tree("").is_err());
	}
}
