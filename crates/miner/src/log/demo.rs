#![forbid(unsafe_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use config::Config;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;
use tracing::debug;

const HEADER: &str = "Case ID,Activity,Timestamp,Resource,Amount,Vendor";

const VENDORS: &[&str] = &[
    "ABC Supplies",
    "XYZ Corp",
    "Tech Solutions",
    "Global Partners",
    "Premium Vendors",
    "Office Depot Inc",
    "Industrial Supplies Co",
    "Digital Services Ltd",
    "Cloud Systems",
    "Enterprise Solutions",
    "Logistics Partners",
    "Manufacturing Direct",
    "Retail Supplies",
    "Professional Services Inc",
    "Consulting Group",
    "Software Licensing Co",
    "Hardware Depot",
    "Marketing Solutions",
    "Facilities Management",
    "Security Services",
];

const CLERKS: &[&str] = &[
    "Sarah Johnson",
    "John Smith",
    "Emily Davis",
    "Michael Brown",
    "Lisa Anderson",
    "David Wilson",
];

const MANAGERS: &[&str] = &["Mike Chen", "Lisa Wang", "Jennifer Martinez", "Robert Taylor"];

const DIRECTORS: &[&str] = &["Robert Kim", "Patricia Lee", "James Anderson"];

/// Synthesizes an accounts-payable event log in the format accepted by
/// [`parse_log`](crate::log::parse_log).
///
/// Cases span three months and follow one of four workflow shapes: the
/// happy path (75%), a missing-PO rejection loop (12%), a duplicate
/// invoice that ends in cancellation (8%), and a high-value escalation
/// through a director (5%). A fixed seed reproduces the exact same log.
#[derive(Debug, Clone, Copy)]
pub struct DemoLog {
    cases: usize,
    seed: Option<u64>,
}

impl DemoLog {
    pub fn new(config: &Config) -> Self {
        Self {
            cases: config.demo.cases,
            seed: config.demo.seed,
        }
    }

    pub fn generate(&self) -> String {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut out = String::from(HEADER);
        out.push('\n');

        let epoch = demo_epoch();
        for case in 1..=self.cases {
            let start = epoch
                + Duration::days(rng.gen_range(0..90))
                + Duration::hours(rng.gen_range(0..9));
            let mut writer = CaseWriter {
                out: &mut out,
                case_id: format!("INV{case:05}"),
                vendor: pick(&mut rng, VENDORS),
                amount: rng.gen_range(500..50_000),
                at: start,
            };

            let path = rng.gen_range(0.0..1.0);
            if path < 0.75 {
                happy_path(&mut rng, &mut writer);
            } else if path < 0.87 {
                missing_po_path(&mut rng, &mut writer);
            } else if path < 0.95 {
                duplicate_path(&mut rng, &mut writer);
            } else {
                writer.amount = rng.gen_range(20_000..50_000);
                escalation_path(&mut rng, &mut writer);
            }
        }

        debug!(cases = self.cases, "generated demo log");
        out
    }
}

impl Default for DemoLog {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// Straight-through approval; payment posts on the next day.
fn happy_path(rng: &mut StdRng, w: &mut CaseWriter<'_>) {
    w.step("Invoice Received", "System");
    w.wait(minutes(rng, 15.0..60.0));
    w.step("Manual Data Entry", pick(rng, CLERKS));
    w.wait(minutes(rng, 10.0..40.0));
    w.step("Approval Request", "System");
    w.wait(minutes(rng, 60.0..300.0));
    let manager = pick(rng, MANAGERS);
    w.step("Manager Review", manager);
    w.wait(minutes(rng, 5.0..25.0));
    w.step("Approval Granted", manager);
    w.wait(minutes(rng, 15.0..45.0));
    w.step("Payment Scheduled", "System");
    w.wait(hours(rng, 18.0..24.0));
    w.step("Payment Processed", "Finance System");
}

/// Rejection loop: the vendor supplies a PO number and the case re-enters
/// data entry before completing normally.
fn missing_po_path(rng: &mut StdRng, w: &mut CaseWriter<'_>) {
    let clerk = pick(rng, CLERKS);
    let manager = pick(rng, MANAGERS);

    w.step("Invoice Received", "System");
    w.wait(minutes(rng, 15.0..60.0));
    w.step("Manual Data Entry", clerk);
    w.wait(minutes(rng, 10.0..40.0));
    w.step("Approval Request", "System");
    w.wait(minutes(rng, 60.0..300.0));
    w.step("Manager Review", manager);
    w.wait(minutes(rng, 5.0..20.0));
    w.step("Rejected - Missing PO", manager);
    w.wait(minutes(rng, 10.0..30.0));
    w.step("Request PO Number", clerk);
    w.wait(hours(rng, 12.0..48.0));
    w.step("PO Number Provided", "Vendor Contact");
    w.wait(minutes(rng, 20.0..60.0));
    w.step("Manual Data Entry", clerk);
    w.wait(minutes(rng, 10.0..40.0));
    w.step("Approval Request", "System");
    w.wait(minutes(rng, 60.0..300.0));
    w.step("Manager Review", manager);
    w.wait(minutes(rng, 5.0..25.0));
    w.step("Approval Granted", manager);
    w.wait(minutes(rng, 15.0..45.0));
    w.step("Payment Scheduled", "System");
    w.wait(hours(rng, 18.0..24.0));
    w.step("Payment Processed", "Finance System");
}

fn duplicate_path(rng: &mut StdRng, w: &mut CaseWriter<'_>) {
    let clerk = pick(rng, CLERKS);
    let manager = pick(rng, MANAGERS);

    w.step("Invoice Received", "System");
    w.wait(minutes(rng, 15.0..60.0));
    w.step("Manual Data Entry", clerk);
    w.wait(minutes(rng, 10.0..40.0));
    w.step("Approval Request", "System");
    w.wait(minutes(rng, 60.0..300.0));
    w.step("Manager Review", manager);
    w.wait(minutes(rng, 5.0..20.0));
    w.step("Rejected - Duplicate Invoice", manager);
    w.wait(minutes(rng, 10.0..30.0));
    w.step("Investigation", clerk);
    w.wait(minutes(rng, 20.0..60.0));
    w.step("Duplicate Confirmed", clerk);
    w.wait(minutes(rng, 5.0..20.0));
    w.step("Invoice Cancelled", "System");
}

/// High-value invoices route through a director; complex ones sometimes
/// take a second pass of data entry.
fn escalation_path(rng: &mut StdRng, w: &mut CaseWriter<'_>) {
    let clerk = pick(rng, CLERKS);
    let manager = pick(rng, MANAGERS);
    let director = pick(rng, DIRECTORS);

    w.step("Invoice Received", "System");
    w.wait(minutes(rng, 15.0..60.0));
    w.step("Manual Data Entry", clerk);
    w.wait(minutes(rng, 15.0..45.0));
    if rng.gen_range(0.0..1.0) > 0.5 {
        w.step("Manual Data Entry", clerk);
        w.wait(minutes(rng, 10.0..30.0));
    }
    w.step("Approval Request", "System");
    w.wait(minutes(rng, 60.0..300.0));
    w.step("Manager Review", manager);
    w.wait(minutes(rng, 10.0..40.0));
    w.step("Escalation to Director", manager);
    w.wait(hours(rng, 12.0..36.0));
    w.step("Director Review", director);
    w.wait(minutes(rng, 15.0..60.0));
    w.step("Approval Granted", director);
    w.wait(minutes(rng, 15.0..45.0));
    w.step("Payment Scheduled", "System");
    w.wait(hours(rng, 18.0..24.0));
    w.step("Payment Processed", "Finance System");
}

struct CaseWriter<'a> {
    out: &'a mut String,
    case_id: String,
    vendor: &'static str,
    amount: u32,
    at: NaiveDateTime,
}

impl CaseWriter<'_> {
    fn step(&mut self, activity: &str, resource: &str) {
        let ts = self.at.format("%Y-%m-%d %H:%M:%S");
        self.out.push_str(&format!(
            "{},{activity},{ts},{resource},{},{}\n",
            self.case_id, self.amount, self.vendor
        ));
    }

    fn wait(&mut self, delay: Duration) {
        self.at += delay;
    }
}

fn pick(rng: &mut StdRng, pool: &'static [&'static str]) -> &'static str {
    pool[rng.gen_range(0..pool.len())]
}

fn minutes(rng: &mut StdRng, range: Range<f64>) -> Duration {
    Duration::seconds((rng.gen_range(range) * 60.0) as i64)
}

fn hours(rng: &mut StdRng, range: Range<f64>) -> Duration {
    Duration::seconds((rng.gen_range(range) * 3600.0) as i64)
}

fn demo_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .expect("2024-01-01 08:00:00 is a valid datetime")
}
