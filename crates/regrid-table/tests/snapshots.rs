//! Snapshot tests pinning the exact rendered grid output.

use insta::assert_snapshot;
use regrid_table::{parse_table, render_table};

fn reformat(lines: &[&str]) -> String {
    render_table(&parse_table(lines)).join("\n")
}

#[test]
fn informal_space_delimited_table() {
    assert_snapshot!(reformat(&["a  b", "cc  d"]), @r"
    +====+===+
    | a  | b |
    +====+===+
    | cc | d |
    ");
}

#[test]
fn multi_line_cell_preserved_across_reformat() {
    let input = ["foo | bar", "baz |", "----+----", "x   | y"];
    assert_snapshot!(reformat(&input), @r"
    +=====+=====+
    | foo | bar |
    | baz |     |
    +=====+=====+
    | x   | y   |
    ");
}

#[test]
fn single_line_without_delimiters() {
    assert_snapshot!(reformat(&["hello world"]), @r"
    +=============+
    | hello world |
    +=============+
    ");
}

#[test]
fn all_blank_column_is_pruned() {
    assert_snapshot!(reformat(&["a |  | c", "d |  | e"]), @r"
    +===+===+
    | a | c |
    +===+===+
    | d | e |
    ");
}

#[test]
fn sloppy_grid_input_is_realigned() {
    let input = [
        "+--+----+",
        "| x | longer |",
        "+--+----+",
        "|  yy | z |",
    ];
    assert_snapshot!(reformat(&input), @r"
    +====+========+
    | x  | longer |
    +====+========+
    | yy | z      |
    ");
}

#[test]
fn three_row_table_gets_body_rules() {
    let input = ["name  count", "apples  3", "pears  12"];
    assert_snapshot!(reformat(&input), @r"
    +========+=======+
    | name   | count |
    +========+=======+
    | apples | 3     |
    +--------+-------+
    | pears  | 12    |
    ");
}

#[test]
fn reformatted_output_is_a_fixed_point() {
    let input = ["a  b", "cc  d"];
    let once = render_table(&parse_table(&input));
    let twice = render_table(&parse_table(&once));
    assert_eq!(once, twice);
}
