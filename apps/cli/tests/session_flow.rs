//! End-to-end sessions driven through scripted input.

use caddie_cli::session::{SessionOutcome, SessionReport, CONFIRMED_MESSAGE, REGION_PROMPT};
use caddie_cli::{run, CliConfig, CliError, SummaryFormat};
use caddie_core::{CartSummary, Catalog, Quantity, Region};

fn play(config: &CliConfig, script: &str) -> (SessionReport, String) {
    let mut output = Vec::new();
    let report = run(config, script.as_bytes(), &mut output).expect("session should finish");
    (report, String::from_utf8(output).expect("utf-8 output"))
}

#[test]
fn utah_scenario_totals_6111_82() {
    // Produit A ×1, Produit B ×1, shipped to Utah, confirmed.
    let (report, output) = play(&CliConfig::default(), "1\n1\ny\n2\n1\nn\nUT\ny\n");

    assert_eq!(report.outcome, SessionOutcome::Confirmed);
    assert_eq!(report.summary.region, Region::Utah);
    assert_eq!(report.summary.total.to_fixed(), "6111.82");
    assert!(output.contains("Prix total avec la TVA : 6111.82 €"));
    assert!(output.contains(CONFIRMED_MESSAGE));
}

#[test]
fn unknown_region_is_rejected_and_asked_again() {
    let (report, output) = play(&CliConfig::default(), "1\n1\nn\nZZ\nut\ny\n");

    assert_eq!(report.summary.region, Region::Utah);
    assert_eq!(output.matches(REGION_PROMPT).count(), 2);
    assert_eq!(
        output
            .matches("État non valide, veuillez entrer un état valide.")
            .count(),
        1
    );
}

#[test]
fn zero_and_negative_quantities_are_rejected() {
    let (report, output) = play(&CliConfig::default(), "2\n0\n-3\n4\nn\nnv\nn\n");

    assert_eq!(report.outcome, SessionOutcome::Cancelled);
    assert_eq!(report.summary.lines.len(), 1);
    assert_eq!(report.summary.lines[0].quantity, Quantity::new(4).unwrap());
    assert_eq!(
        output
            .matches("Quantité invalide, veuillez entrer un nombre positif.")
            .count(),
        2
    );
}

#[test]
fn out_of_range_product_is_rejected() {
    let (report, output) = play(&CliConfig::default(), "0\n6\nE\n5\n1\nn\nca\ny\n");

    assert_eq!(report.summary.lines[0].product, "Produit E");
    assert_eq!(
        output
            .matches("Choix invalide, veuillez entrer un numéro valide.")
            .count(),
        3
    );
}

#[test]
fn json_summary_follows_confirmed_order() {
    let config = CliConfig {
        summary: SummaryFormat::Json,
        ..CliConfig::default()
    };
    let (report, output) = play(&config, "4\n2\nn\ntx\ny\n");

    let json_start = output.find('{').expect("summary printed");
    let parsed = CartSummary::from_json(output[json_start..].trim()).expect("valid summary");

    assert_eq!(parsed, report.summary);
    let cart = parsed.to_cart();
    assert_eq!(cart.items()[0].product, *Catalog::standard().get(4).unwrap());
    assert_eq!(cart.items()[0].quantity.get(), 2);
}

#[test]
fn json_summary_is_skipped_when_cancelled() {
    let config = CliConfig {
        summary: SummaryFormat::Json,
        ..CliConfig::default()
    };
    let (_, output) = play(&config, "4\n2\nn\ntx\nn\n");
    assert!(!output.contains('{'));
}

#[test]
fn undecodable_input_line_is_asked_again() {
    let mut output = Vec::new();
    let report = run(
        &CliConfig::default(),
        &b"\xff\xfe\n1\n1\nn\nut\ny\n"[..],
        &mut output,
    )
    .expect("session should finish");
    let output = String::from_utf8(output).expect("utf-8 output");

    assert_eq!(report.outcome, SessionOutcome::Confirmed);
    assert_eq!(report.summary.lines.len(), 1);
    assert_eq!(
        output
            .matches("Choix invalide, veuillez entrer un numéro valide.")
            .count(),
        1
    );
}

#[test]
fn closed_input_aborts_the_session() {
    let mut output = Vec::new();
    let err = run(&CliConfig::default(), "1\n1\nn\n".as_bytes(), &mut output).unwrap_err();

    assert!(matches!(err, CliError::InputClosed { ref prompt } if prompt == REGION_PROMPT));
}
