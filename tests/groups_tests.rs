use foldcmp::compare::Reporter;
use foldcmp::config::ReportSettings;
use foldcmp::groups::{GroupIndex, SizeGroup};
use foldcmp::table::MetricTable;
use std::io::Write;
use std::str::FromStr;
use tempfile::NamedTempFile;

const INDEX: &str = "\
[Group S]
length_8:
1abc  8
1def  9
[Group M]
length_30:
2abc  30
[Group L]
length_90:
3abc  90
";

fn sample_comparison() -> foldcmp::compare::Comparison {
    let a = MetricTable::try_from_pairs([
        ("1abc", 1.0),
        ("1def", 3.0),
        ("2abc", 1.0),
        ("9zzz", 1.0),
    ])
    .unwrap();
    let b = MetricTable::try_from_pairs([
        ("1abc", 2.0),
        ("1def", 2.0),
        ("2abc", 2.0),
        ("9zzz", 2.0),
    ])
    .unwrap();
    Reporter::new(ReportSettings::default())
        .unwrap()
        .compare(&a, &b)
        .unwrap()
}

#[test]
fn test_group_index_loads_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", INDEX).unwrap();
    let index = GroupIndex::load(file.path()).unwrap();
    assert_eq!(index.len(), 4);
    let small: Vec<_> = index.members(SizeGroup::S).collect();
    assert_eq!(small, vec!["1abc", "1def"]);
}

#[test]
fn test_split_recounts_each_group() {
    let index = GroupIndex::from_str(INDEX).unwrap();
    let groups = sample_comparison().split_by_group(&index);

    // L has no compared structures, 9zzz belongs to no group.
    assert_eq!(groups.len(), 2);

    let s = &groups[&SizeGroup::S];
    assert_eq!(s.summary.total, 2);
    assert_eq!(s.summary.a_better, 1);
    assert_eq!(s.summary.b_better, 1);
    assert_eq!(s.group, Some(SizeGroup::S));

    let m = &groups[&SizeGroup::M];
    assert_eq!(m.summary.total, 1);
    assert_eq!(m.summary.a_better, 1);
}

#[test]
fn test_group_report_header_names_group() {
    let index = GroupIndex::from_str(INDEX).unwrap();
    let groups = sample_comparison().split_by_group(&index);
    let text = groups[&SizeGroup::M].render();
    assert!(text.starts_with("# Compare RMSD results between quantum and af2 (group M)\n"));
    assert!(text.contains("# Total proteins compared: 1\n# quantum better: 1 (100.0%)\n# af2 better: 0 (0.0%)\n"));
}
