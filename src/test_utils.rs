#[cfg(test)]
pub mod fixtures {
    use lopdf::{
        content::{Content, Operation},
        dictionary, Document, Object, Stream,
    };

    /// Builds an in-memory PDF with one page per entry, each page showing the
    /// entry's text in Courier. An empty entry produces a page with no text.
    pub fn pdf_with_pages(page_texts: &[&str]) -> Vec<u8> {
        let pages = page_texts
            .iter()
            .map(|text| {
                if text.is_empty() {
                    vec![]
                } else {
                    vec![
                        Operation::new("BT", vec![]),
                        Operation::new("Tf", vec!["F1".into(), 24.into()]),
                        Operation::new("Td", vec![72.into(), 700.into()]),
                        Operation::new("Tj", vec![Object::string_literal(*text)]),
                        Operation::new("ET", vec![]),
                    ]
                }
            })
            .collect();

        pdf_from_operations(pages)
    }

    /// A one-page PDF in 12pt Courier where each word is its own `Tj`,
    /// followed by a `Td` that moves the line start right by the given amount.
    pub fn pdf_with_spaced_words(words: &[(&str, i64)]) -> Vec<u8> {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![72.into(), 700.into()]),
        ];
        for (word, advance) in words {
            operations.push(Operation::new("Tj", vec![Object::string_literal(*word)]));
            if *advance != 0 {
                operations.push(Operation::new("Td", vec![(*advance).into(), 0.into()]));
            }
        }
        operations.push(Operation::new("ET", vec![]));

        pdf_from_operations(vec![operations])
    }

    fn pdf_from_operations(pages: Vec<Vec<Operation>>) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for operations in pages {
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().expect("content encodes"),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).expect("pdf saves to memory");
        bytes
    }

    /// A single-page PDF with nothing on the page.
    pub fn blank_pdf() -> Vec<u8> {
        pdf_with_pages(&[""])
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents a client error (4xx)
    pub fn assert_client_error_status(status: StatusCode) {
        assert!(
            status.is_client_error(),
            "Expected client error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_pdf_has_header() {
        let bytes = pdf_with_pages(&["Hello"]);
        assert!(bytes.starts_with(b"%PDF-1.5"));
    }

    #[test]
    fn test_fixtures_pdf_page_count() {
        let bytes = pdf_with_pages(&["One", "Two"]);
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn test_fixtures_spaced_words_use_separate_operators() {
        let bytes = pdf_with_spaced_words(&[("one", 40), ("two", 0)]);
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        let page_id = *doc.get_pages().values().next().unwrap();
        let content = doc.get_and_decode_page_content(page_id).unwrap();

        let tj_count = content
            .operations
            .iter()
            .filter(|op| op.operator == "Tj")
            .count();
        assert_eq!(tj_count, 2);
    }

    #[test]
    fn test_fixtures_blank_pdf_loads() {
        let doc = lopdf::Document::load_mem(&blank_pdf()).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }
}
