//! Container behaviour tests
//!
//! Ordering, geometry, numbering uniqueness and list grouping through the
//! public API only.

use std::collections::HashSet;

use blkdoc::{
    AllocationStrategy, BlockError, BlockItem, Document, Length, NumberingId, NumberingSettings,
    Settings,
};
use blkdoc_oxml::NodeId;

fn order(doc: &Document) -> Vec<NodeId> {
    doc.body().block_items().iter().map(BlockItem::node).collect()
}

// =============================================================================
// Appending
// =============================================================================

#[test]
fn test_append_preserves_existing_order() {
    let mut doc = Document::new();
    {
        let mut body = doc.body_mut();
        body.add_paragraph("first", None);
        body.add_table(1, 1, Length::from_inches(1.0)).unwrap();
        body.add_paragraph("third", Some("Quote"));
    }
    let before = order(&doc);

    let p = doc.body_mut().add_paragraph("tail", None).node();
    let mut expected = before.clone();
    expected.push(p);
    assert_eq!(order(&doc), expected);

    let t = doc
        .body_mut()
        .add_table(2, 2, Length::from_inches(2.0))
        .unwrap()
        .node();
    expected.push(t);
    assert_eq!(order(&doc), expected);
}

#[test]
fn test_append_does_not_touch_existing_items() {
    let mut doc = Document::new();
    doc.body_mut().add_paragraph("keep me", Some("Normal"));
    let before = doc.body().paragraphs()[0].node();
    let xml_before = doc.tree().element_to_xml(before);

    doc.body_mut().add_paragraph("new", Some("Heading2"));
    assert_eq!(doc.tree().element_to_xml(before), xml_before);
}

#[test]
fn test_table_geometry_sums_to_width() {
    let mut doc = Document::new();
    let width = Length::from_inches(6.5);
    let mut body = doc.body_mut();
    let table = body.add_table(3, 7, width).unwrap();

    assert_eq!(table.row_count(), 3);
    assert_eq!(table.column_count(), 7);
    let widths = table.column_widths();
    assert_eq!(widths.iter().copied().sum::<Length>(), width);
    // remainder lands in the last column
    let base = width.twips() / 7;
    assert!(widths[..6].iter().all(|w| w.twips() == base));
    assert_eq!(widths[6].twips(), base + width.twips() % 7);
}

#[test]
fn test_table_cells_are_containers() {
    let mut doc = Document::new();
    let cell = {
        let mut body = doc.body_mut();
        let table = body.add_table(2, 2, Length::from_inches(4.0)).unwrap();
        table.cell(1, 1).unwrap()
    };

    {
        let mut cell = doc.container_mut(cell).unwrap();
        cell.add_paragraph("inside", None);
        cell.add_table(1, 1, Length::from_inches(1.0)).unwrap();
    }

    let view = doc.container(cell).unwrap();
    // the cell already held one empty paragraph
    assert_eq!(view.paragraphs().len(), 2);
    assert_eq!(view.paragraphs()[1].text(), "inside");
    assert_eq!(view.tables().len(), 1);
    assert_eq!(doc.body().tables().len(), 1);
}

// =============================================================================
// Numbering
// =============================================================================

#[test]
fn test_allocate_then_attach_is_unique() {
    let xml = br#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
        <w:body>
            <w:p><w:pPr><w:numPr><w:ilvl w:val="0"/><w:numId w:val="0"/></w:numPr></w:pPr></w:p>
            <w:p><w:pPr><w:numPr><w:ilvl w:val="0"/><w:numId w:val="2"/></w:numPr></w:pPr></w:p>
            <w:sectPr/>
        </w:body>
    </w:document>"#;
    let mut doc = Document::from_xml(xml).unwrap();
    let pre_existing: HashSet<u32> = [0, 2].into_iter().collect();

    let mut seen = HashSet::new();
    let mut body = doc.body_mut();
    for i in 0..50 {
        let id = body.generate_numbering_id().unwrap();
        assert!(!pre_existing.contains(&id.value()));
        assert!(seen.insert(id), "id {} handed out twice", id);
        body.add_paragraph(&format!("item {}", i), None)
            .set_numbering(id, 0);
    }
    assert_eq!(seen.len(), 50);
}

#[test]
fn test_allocation_sees_ids_in_other_containers() {
    let mut doc = Document::new();
    let cell = {
        let mut body = doc.body_mut();
        let table = body.add_table(1, 1, Length::from_inches(2.0)).unwrap();
        table.cell(0, 0).unwrap()
    };
    let in_cell = doc.container_mut(cell).unwrap().add_list(None, 0).unwrap();
    let in_body = doc.body_mut().add_list(None, 0).unwrap();
    assert_ne!(in_cell.numbering_id(), in_body.numbering_id());
}

#[test]
fn test_counter_strategy_over_document() {
    let settings = Settings {
        numbering: NumberingSettings {
            strategy: AllocationStrategy::Counter,
            min_id: 100,
            max_id: 199,
            reserve_on_allocate: true,
        },
        ..Settings::default()
    };
    let mut doc = Document::with_settings(settings).unwrap();
    let mut body = doc.body_mut();
    let ids: Vec<u32> = (0..3)
        .map(|_| body.add_list(None, 0).unwrap().numbering_id().value())
        .collect();
    assert_eq!(ids, vec![100, 101, 102]);
}

#[test]
fn test_exhaustion_is_an_error() {
    let settings = Settings {
        numbering: NumberingSettings {
            min_id: 1,
            max_id: 2,
            ..NumberingSettings::default()
        },
        ..Settings::default()
    };
    let mut doc = Document::with_settings(settings).unwrap();
    let mut body = doc.body_mut();
    body.add_list(None, 0).unwrap();
    body.add_list(None, 0).unwrap();
    let paragraphs_before = body.paragraphs().len();

    let err = body.add_list(None, 0).unwrap_err();
    assert!(matches!(err, BlockError::AllocationExhausted { min: 1, max: 2 }));
    // a failed add_list leaves the container untouched
    assert_eq!(body.paragraphs().len(), paragraphs_before);
}

#[test]
fn test_unattached_allocation_is_reserved() {
    let mut doc = Document::new();
    let first = doc.body_mut().generate_numbering_id().unwrap();
    let second = doc.body_mut().generate_numbering_id().unwrap();
    assert_ne!(first, second);

    assert!(doc.numbering_mut().release(first));
    let third = doc.body_mut().generate_numbering_id().unwrap();
    assert_eq!(third, first);
}

// =============================================================================
// Lists
// =============================================================================

#[test]
fn test_grouping_of_scattered_paragraphs() {
    let mut doc = Document::new();
    let mut body = doc.body_mut();
    let ids = [Some(1), None, Some(2), Some(1), None];
    let nodes: Vec<NodeId> = ids
        .iter()
        .map(|id| {
            let mut p = body.add_paragraph("x", None);
            if let Some(id) = id {
                p.set_numbering(NumberingId(*id), 0);
            }
            p.node()
        })
        .collect();

    let lists = body.lists();
    assert_eq!(lists.len(), 2);
    let mut group_ids: Vec<u32> = lists.iter().map(|g| g.numbering_id().value()).collect();
    group_ids.sort_unstable();
    assert_eq!(group_ids, vec![1, 2]);

    let view = body.view();
    let one = lists
        .iter()
        .find(|g| g.numbering_id() == NumberingId(1))
        .unwrap();
    let members: Vec<NodeId> = one.paragraphs(&view).iter().map(|p| p.node()).collect();
    assert_eq!(members, vec![nodes[0], nodes[3]]);

    let all: Vec<NodeId> = view.paragraphs().iter().map(|p| p.node()).collect();
    assert_eq!(all, nodes);
}

#[test]
fn test_add_list_grows_paragraphs_by_one() {
    let mut doc = Document::new();
    let mut body = doc.body_mut();
    body.add_paragraph("a", None);
    body.add_paragraph("b", None);

    let group = body.add_list(None, 2).unwrap();
    let paragraphs = body.paragraphs();
    assert_eq!(paragraphs.len(), 3);
    assert_eq!(paragraphs[2].numbering_id(), Some(group.numbering_id()));
    assert_eq!(paragraphs[2].level(), Some(2));
}

#[test]
fn test_groups_track_external_mutation() {
    let mut doc = Document::new();
    let group = doc.body_mut().add_list(None, 0).unwrap();
    let second = group
        .add_paragraph(&mut doc.body_mut(), "two")
        .unwrap()
        .node();

    assert_eq!(group.paragraphs(&doc.body()).len(), 2);
    doc.remove(second).unwrap();
    assert_eq!(group.paragraphs(&doc.body()).len(), 1);
}

#[test]
fn test_list_items_stay_in_their_container() {
    let mut doc = Document::new();
    let (group, cell) = {
        let mut body = doc.body_mut();
        let group = body.add_list(None, 0).unwrap();
        let table = body.add_table(1, 1, Length::from_inches(2.0)).unwrap();
        (group, table.cell(0, 0).unwrap())
    };

    let err = group
        .add_paragraph(&mut doc.container_mut(cell).unwrap(), "stray")
        .unwrap_err();
    assert!(matches!(err, BlockError::ContainerMismatch { .. }));

    assert_eq!(group.paragraphs(&doc.body()).len(), 1);
    assert!(doc.container(cell).unwrap().lists().is_empty());
}

#[test]
fn test_reads_are_repeatable() {
    let mut doc = Document::new();
    {
        let mut body = doc.body_mut();
        body.add_paragraph("p", None);
        body.add_table(2, 2, Length::from_inches(2.0)).unwrap();
        body.add_list(None, 0).unwrap();
    }
    let body = doc.body();
    assert_eq!(body.paragraphs(), body.paragraphs());
    assert_eq!(body.tables(), body.tables());
    assert_eq!(body.block_items(), body.block_items());
}

// =============================================================================
// Parsed content
// =============================================================================

#[test]
fn test_oversized_grid_widths_do_not_crash() {
    let xml = br#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>
        <w:tbl>
            <w:tblGrid><w:gridCol w:w="9223372036854775807"/><w:gridCol w:w="9223372036854775807"/></w:tblGrid>
            <w:tr><w:tc><w:p/></w:tc><w:tc><w:p/></w:tc></w:tr>
        </w:tbl>
    </w:body></w:document>"#;
    let doc = Document::from_xml(xml).unwrap();
    let table = doc.body().tables()[0];
    assert_eq!(table.width(), Length::from_twips(i64::MAX));
    assert_eq!(table.column_widths()[0].emu(), i64::MAX);
}

#[test]
fn test_header_part_accepts_new_content() {
    let xml = br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
    <w:hdr xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
        <w:p><w:r><w:t>Draft</w:t></w:r></w:p>
    </w:hdr>"#;
    let mut doc = Document::from_part_xml(xml).unwrap();
    {
        let mut header = doc.body_mut();
        let list = header.add_list(Some("ListBullet"), 0).unwrap();
        list.add_paragraph(&mut header, "second").unwrap();
        header.add_table(1, 3, Length::from_twips(3000)).unwrap();
    }

    let reread = Document::from_part_xml(doc.to_xml().as_bytes()).unwrap();
    let header = reread.body();
    let texts: Vec<String> = header.paragraphs().iter().map(|p| p.text()).collect();
    assert_eq!(texts, vec!["Draft", "", "second"]);
    assert_eq!(header.lists().len(), 1);
    assert_eq!(header.tables()[0].width(), Length::from_twips(3000));
}

#[test]
fn test_body_requires_main_document() {
    let err = Document::from_xml(b"<w:hdr><w:p/></w:hdr>").unwrap_err();
    assert!(matches!(err, BlockError::Oxml(_)));
    assert!(Document::from_part_xml(b"<w:hdr><w:p/></w:hdr>").is_ok());
}

// =============================================================================
// Round trip
// =============================================================================

#[test]
fn test_built_document_survives_xml_round_trip() {
    let mut doc = Document::new();
    {
        let mut body = doc.body_mut();
        body.add_paragraph("Title", Some("Heading1"));
        let list = body.add_list(Some("ListNumber"), 0).unwrap();
        list.add_paragraph(&mut body, "one").unwrap();
        list.add_paragraph_at(&mut body, " two & three ", 1).unwrap();
        body.add_table(2, 3, Length::from_twips(9000)).unwrap();
    }

    let xml = doc.to_xml();
    let reread = Document::from_xml(xml.as_bytes()).unwrap();
    let body = reread.body();

    let texts: Vec<String> = body.paragraphs().iter().map(|p| p.text()).collect();
    assert_eq!(texts, vec!["Title", "", "one", " two & three "]);
    assert_eq!(body.lists().len(), 1);
    assert_eq!(body.lists()[0].style(), Some("ListNumber"));
    assert_eq!(body.tables()[0].width(), Length::from_twips(9000));
    assert_eq!(body.tables()[0].row_count(), 2);
    assert!(xml.trim_end().ends_with("<w:sectPr/></w:body></w:document>"));
}
