use overdose_trends::data::aggregate::monthly_means;
use overdose_trends::data::filter::filter_rows;
use overdose_trends::data::index::category_domain;
use overdose_trends::data::loader::{load_bundled, load_str};
use overdose_trends::data::model::Selection;
use overdose_trends::data::pipeline::{TrendCharts, Windows};
use overdose_trends::data::window::trailing;

const SCENARIO: &str = "\
Indicator,Year,Month,Data Value
A,2020,January,10
A,2020,January,20
B,2020,February,5
";

#[test]
fn three_row_scenario() {
    let rows = load_str(SCENARIO).unwrap();

    let domain = category_domain(&rows);
    assert_eq!(domain.labels(), vec!["All", "A", "B"]);

    let only_a = monthly_means(&filter_rows(&rows, &Selection::Category("A".into())));
    assert_eq!(only_a.labels(), vec!["2020 January"]);
    assert_eq!(only_a.values(), vec![15.0]);

    let all = monthly_means(&filter_rows(&rows, &Selection::All));
    assert_eq!(all.labels(), vec!["2020 January", "2020 February"]);
    assert_eq!(all.values(), vec![15.0, 5.0]);
}

#[test]
fn unusable_rows_only() {
    let rows = load_str("Indicator,Year,Month,Data Value\nA,2020,January,\nB,2020,March,abc\n").unwrap();
    assert!(rows.is_empty());

    let domain = category_domain(&rows);
    assert_eq!(domain.labels(), vec!["All"]);

    for selection in [Selection::All, Selection::Category("A".into())] {
        let charts = TrendCharts::compute(&rows, &selection, Windows::default());
        assert!(charts.long.is_empty());
        assert!(charts.short.is_empty());
    }
}

#[test]
fn bundled_dataset_end_to_end() {
    let rows = load_bundled().unwrap();
    let domain = category_domain(&rows);
    assert_eq!(domain.labels()[0], "All");
    assert!(domain.categories().windows(2).all(|w| w[0] < w[1]));

    for selection in domain.selections() {
        let monthly = monthly_means(&filter_rows(&rows, &selection));
        assert!(!monthly.is_empty());

        let charts = TrendCharts::compute(&rows, &selection, Windows::default());
        assert_eq!(charts.long.points(), trailing(&monthly, 36));
        assert_eq!(charts.short.points(), trailing(&monthly, 12));
        assert_eq!(charts.short.labels().last(), monthly.labels().last());
        assert_eq!(charts.short.labels().last(), Some(&"2023 December"));
    }
}

#[test]
fn means_match_hand_computation() {
    let rows = load_str(
        "Indicator,Year,Month,Data Value\n\
         X,2021,October,1.5\n\
         X,2021,March,4\n\
         Y,2021,October,2.5\n\
         X,2021,March,\n\
         Y,2021,October,3.25\n",
    )
    .unwrap();
    let series = monthly_means(&filter_rows(&rows, &Selection::All));
    assert_eq!(series.labels(), vec!["2021 March", "2021 October"]);
    assert!((series.values()[0] - 4.0).abs() < 1e-12);
    assert!((series.values()[1] - (1.5 + 2.5 + 3.25) / 3.0).abs() < 1e-12);
}
