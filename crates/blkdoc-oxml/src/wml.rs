//! WordprocessingML element names, constructors and accessors
//!
//! These are the small primitives the block-item layer builds on: create an
//! empty paragraph or a table, read and write paragraph style and numbering
//! properties, and find rows, cells and runs.

use crate::tree::{NodeId, Tree};

/// WordprocessingML main namespace
pub const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

pub const DOCUMENT: &str = "w:document";
pub const BODY: &str = "w:body";
pub const SECT_PR: &str = "w:sectPr";
pub const P: &str = "w:p";
pub const P_PR: &str = "w:pPr";
pub const P_STYLE: &str = "w:pStyle";
pub const NUM_PR: &str = "w:numPr";
pub const ILVL: &str = "w:ilvl";
pub const NUM_ID: &str = "w:numId";
pub const R: &str = "w:r";
pub const T: &str = "w:t";
pub const TBL: &str = "w:tbl";
pub const TBL_PR: &str = "w:tblPr";
pub const TBL_W: &str = "w:tblW";
pub const TBL_LOOK: &str = "w:tblLook";
pub const TBL_GRID: &str = "w:tblGrid";
pub const GRID_COL: &str = "w:gridCol";
pub const TR: &str = "w:tr";
pub const TC: &str = "w:tc";
pub const TC_PR: &str = "w:tcPr";
pub const TC_W: &str = "w:tcW";
pub const HDR: &str = "w:hdr";
pub const FTR: &str = "w:ftr";
pub const FOOTNOTE: &str = "w:footnote";
pub const ENDNOTE: &str = "w:endnote";
pub const COMMENT: &str = "w:comment";
pub const TXBX_CONTENT: &str = "w:txbxContent";

pub const VAL: &str = "w:val";
pub const W: &str = "w:w";
pub const TYPE: &str = "w:type";

/// Elements whose children are block items (paragraphs and tables)
pub const CONTAINERS: &[&str] = &[BODY, TC, HDR, FTR, FOOTNOTE, ENDNOTE, COMMENT, TXBX_CONTENT];

/// Check whether an element name can hold block items
pub fn is_container(name: &str) -> bool {
    CONTAINERS.contains(&name)
}

/// Create an empty document: `w:document/w:body` with a trailing `w:sectPr`
///
/// Returns the tree together with the handle of its body.
pub fn new_document() -> (Tree, NodeId) {
    let mut tree = Tree::new(DOCUMENT);
    let root = tree.root();
    tree.set_attr(root, "xmlns:w", WML_NS);

    let body = tree.create(BODY);
    tree.append_child(root, body);
    let sect_pr = tree.create(SECT_PR);
    tree.append_child(body, sect_pr);
    (tree, body)
}

/// The `w:body` of a document tree
pub fn body(tree: &Tree) -> Option<NodeId> {
    tree.first_child_named(tree.root(), BODY)
}

/// Create an empty part whose root is the container `root` (e.g. `w:hdr`)
pub fn new_part(root: &str) -> Tree {
    let mut tree = Tree::new(root);
    let root = tree.root();
    tree.set_attr(root, "xmlns:w", WML_NS);
    tree
}

/// The top-level container of a part
///
/// `w:body` for a main document, the root itself for a part rooted at a
/// container such as `w:hdr` or `w:ftr`.
pub fn main_container(tree: &Tree) -> Option<NodeId> {
    let root = tree.root();
    if tree.is(root, DOCUMENT) {
        body(tree)
    } else if is_container(tree.name(root)) {
        Some(root)
    } else {
        None
    }
}

/// Every container element reachable from the root, in document order
pub fn containers(tree: &Tree) -> Vec<NodeId> {
    let root = tree.root();
    std::iter::once(root)
        .chain(tree.descendants(root))
        .filter(|&node| is_container(tree.name(node)))
        .collect()
}

/// Create a detached, empty `w:p`
pub fn new_p(tree: &mut Tree) -> NodeId {
    tree.create(P)
}

/// Append a run holding `text` to a paragraph
pub fn add_r(tree: &mut Tree, p: NodeId, text: &str) -> NodeId {
    let r = tree.create(R);
    let t = tree.create(T);
    if text.starts_with(char::is_whitespace) || text.ends_with(char::is_whitespace) {
        tree.set_attr(t, "xml:space", "preserve");
    }
    tree.set_text(t, text);
    tree.append_child(r, t);
    tree.append_child(p, r);
    r
}

/// Runs of a paragraph, in document order
pub fn runs(tree: &Tree, p: NodeId) -> Vec<NodeId> {
    tree.children_named(p, R).collect()
}

/// Concatenated `w:t` text of a run
pub fn run_text(tree: &Tree, r: NodeId) -> String {
    tree.children_named(r, T)
        .filter_map(|t| tree.text(t))
        .collect()
}

/// `w:pPr` of a paragraph, created as the first child when missing
pub fn get_or_add_p_pr(tree: &mut Tree, p: NodeId) -> NodeId {
    match tree.first_child_named(p, P_PR) {
        Some(p_pr) => p_pr,
        None => {
            let p_pr = tree.create(P_PR);
            tree.insert_child(p, 0, p_pr);
            p_pr
        }
    }
}

/// Paragraph style id (`w:pPr/w:pStyle/@w:val`)
pub fn p_style(tree: &Tree, p: NodeId) -> Option<&str> {
    let p_pr = tree.first_child_named(p, P_PR)?;
    let p_style = tree.first_child_named(p_pr, P_STYLE)?;
    tree.attr(p_style, VAL)
}

/// Set or clear the paragraph style id
pub fn set_p_style(tree: &mut Tree, p: NodeId, style: Option<&str>) {
    match style {
        Some(style) => {
            let p_pr = get_or_add_p_pr(tree, p);
            let p_style = match tree.first_child_named(p_pr, P_STYLE) {
                Some(p_style) => p_style,
                None => {
                    let p_style = tree.create(P_STYLE);
                    tree.insert_child(p_pr, 0, p_style);
                    p_style
                }
            };
            tree.set_attr(p_style, VAL, style);
        }
        None => {
            let existing = tree
                .first_child_named(p, P_PR)
                .and_then(|p_pr| tree.first_child_named(p_pr, P_STYLE));
            if let Some(p_style) = existing {
                tree.detach(p_style);
            }
        }
    }
}

fn num_pr_val(tree: &Tree, p: NodeId, name: &str) -> Option<u32> {
    let p_pr = tree.first_child_named(p, P_PR)?;
    let num_pr = tree.first_child_named(p_pr, NUM_PR)?;
    let node = tree.first_child_named(num_pr, name)?;
    tree.attr(node, VAL)?.trim().parse().ok()
}

/// Numbering identifier of a paragraph (`w:numPr/w:numId/@w:val`)
pub fn p_num_id(tree: &Tree, p: NodeId) -> Option<u32> {
    num_pr_val(tree, p, NUM_ID)
}

/// Indentation level of a numbered paragraph (`w:numPr/w:ilvl/@w:val`)
pub fn p_ilvl(tree: &Tree, p: NodeId) -> Option<u32> {
    num_pr_val(tree, p, ILVL)
}

/// Attach numbering properties to a paragraph, replacing any existing ones
pub fn set_num_pr(tree: &mut Tree, p: NodeId, num_id: u32, ilvl: u32) {
    let p_pr = get_or_add_p_pr(tree, p);
    if let Some(old) = tree.first_child_named(p_pr, NUM_PR) {
        tree.detach(old);
    }

    let num_pr = tree.create(NUM_PR);
    let ilvl_node = tree.create(ILVL);
    tree.set_attr(ilvl_node, VAL, ilvl.to_string());
    tree.append_child(num_pr, ilvl_node);
    let num_id_node = tree.create(NUM_ID);
    tree.set_attr(num_id_node, VAL, num_id.to_string());
    tree.append_child(num_pr, num_id_node);

    // numPr follows pStyle in the pPr sequence
    let index = match tree.children(p_pr).first() {
        Some(&first) if tree.is(first, P_STYLE) => 1,
        _ => 0,
    };
    tree.insert_child(p_pr, index, num_pr);
}

/// Remove numbering properties from a paragraph
pub fn clear_num_pr(tree: &mut Tree, p: NodeId) {
    let existing = tree
        .first_child_named(p, P_PR)
        .and_then(|p_pr| tree.first_child_named(p_pr, NUM_PR));
    if let Some(num_pr) = existing {
        tree.detach(num_pr);
    }
}

/// Create a detached `w:tbl` with `rows` rows and one column per entry of `col_widths`
///
/// Widths are in twips (`dxa`). Every cell gets a matching `w:tcW` and one
/// empty paragraph, since a cell must end with a paragraph.
pub fn new_tbl(tree: &mut Tree, rows: usize, col_widths: &[i64]) -> NodeId {
    let tbl = tree.create(TBL);

    let tbl_pr = tree.create(TBL_PR);
    let tbl_w = tree.create(TBL_W);
    tree.set_attr(tbl_w, TYPE, "auto");
    tree.set_attr(tbl_w, W, "0");
    tree.append_child(tbl_pr, tbl_w);
    let tbl_look = tree.create(TBL_LOOK);
    for (key, value) in [
        ("w:firstColumn", "1"),
        ("w:firstRow", "1"),
        ("w:lastColumn", "0"),
        ("w:lastRow", "0"),
        ("w:noHBand", "0"),
        ("w:noVBand", "1"),
        (VAL, "04A0"),
    ] {
        tree.set_attr(tbl_look, key, value);
    }
    tree.append_child(tbl_pr, tbl_look);
    tree.append_child(tbl, tbl_pr);

    let tbl_grid = tree.create(TBL_GRID);
    for width in col_widths {
        let grid_col = tree.create(GRID_COL);
        tree.set_attr(grid_col, W, width.to_string());
        tree.append_child(tbl_grid, grid_col);
    }
    tree.append_child(tbl, tbl_grid);

    for _ in 0..rows {
        let tr = tree.create(TR);
        for width in col_widths {
            let tc = tree.create(TC);
            let tc_pr = tree.create(TC_PR);
            let tc_w = tree.create(TC_W);
            tree.set_attr(tc_w, TYPE, "dxa");
            tree.set_attr(tc_w, W, width.to_string());
            tree.append_child(tc_pr, tc_w);
            tree.append_child(tc, tc_pr);
            let p = new_p(tree);
            tree.append_child(tc, p);
            tree.append_child(tr, tc);
        }
        tree.append_child(tbl, tr);
    }

    tbl
}

/// Rows of a table, in document order
pub fn tbl_rows(tree: &Tree, tbl: NodeId) -> Vec<NodeId> {
    tree.children_named(tbl, TR).collect()
}

/// Grid column widths of a table, in twips; unparseable widths read as 0
pub fn grid_col_widths(tree: &Tree, tbl: NodeId) -> Vec<i64> {
    let Some(grid) = tree.first_child_named(tbl, TBL_GRID) else {
        return Vec::new();
    };
    tree.children_named(grid, GRID_COL)
        .map(|col| {
            tree.attr(col, W)
                .and_then(|w| w.trim().parse().ok())
                .unwrap_or(0)
        })
        .collect()
}

/// Cell at (`row`, `col`) of a table
pub fn tbl_cell(tree: &Tree, tbl: NodeId, row: usize, col: usize) -> Option<NodeId> {
    let tr = tree.children_named(tbl, TR).nth(row)?;
    tree.children_named(tr, TC).nth(col)
}
