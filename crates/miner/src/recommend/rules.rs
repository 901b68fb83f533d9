#![forbid(unsafe_code)]

use crate::domain::ProcessEvent;
use crate::recommend::{Impact, Recommendation};

/// Evaluate the fixed rule list against an event log.
///
/// Each rule keys on the presence or count of specific activity names;
/// no statistics beyond counting are involved. The payment-processing
/// suggestion is unconditional, so even an empty log yields one entry.
pub fn recommend(events: &[ProcessEvent]) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    let manual_entries = count_exact(events, "Manual Data Entry");
    if manual_entries > 0 {
        recommendations.push(Recommendation {
            title: "Automate Invoice Data Extraction".into(),
            description: "Implement OCR and AI-powered data extraction to automatically \
                          capture invoice details from PDFs and emails, eliminating manual \
                          data entry."
                .into(),
            impact: Impact::High,
            time_saved: hours_per_week(manual_entries, 15),
            affected_activities: activities(&["Manual Data Entry", "Invoice Received"]),
            implementation: "Use document intelligence APIs (e.g., Azure Form Recognizer, \
                             Google Document AI) to extract structured data from invoices."
                .into(),
        });
    }

    let rejections = count_containing(events, &["Rejected"]);
    if rejections > 0 {
        recommendations.push(Recommendation {
            title: "Implement Smart Validation Rules".into(),
            description: "Add automated pre-validation checks for PO numbers, duplicate \
                          invoices, and vendor information before approval routing to \
                          reduce rejections and rework."
                .into(),
            impact: Impact::High,
            time_saved: hours_per_week(rejections, 30),
            affected_activities: activities(&[
                "Rejected - Missing PO",
                "Rejected - Duplicate Invoice",
                "Request PO Number",
            ]),
            implementation: "Configure business rules engine to validate invoices against \
                             PO database and historical invoice records automatically."
                .into(),
        });
    }

    let escalations = count_containing(events, &["Escalation"]);
    if escalations > 0 {
        recommendations.push(Recommendation {
            title: "Smart Approval Routing".into(),
            description: "Implement intelligent approval routing based on amount \
                          thresholds, vendor types, and department budgets to \
                          automatically route to the correct approver."
                .into(),
            impact: Impact::Medium,
            time_saved: hours_per_week(escalations, 20),
            affected_activities: activities(&["Escalation to Director", "Approval Request"]),
            implementation: "Set up workflow rules that automatically determine approval \
                             hierarchy based on invoice attributes (amount, vendor, \
                             category)."
                .into(),
        });
    }

    let scheduled_payments = count_exact(events, "Payment Scheduled");
    recommendations.push(Recommendation {
        title: "Streamline Payment Processing".into(),
        description: "Connect approval system directly to payment systems (ERP/Banking) \
                      to automatically schedule and process payments without manual \
                      intervention."
            .into(),
        impact: Impact::Medium,
        time_saved: hours_per_week(scheduled_payments, 10),
        affected_activities: activities(&["Payment Scheduled", "Payment Processed"]),
        implementation: "Integrate with ERP system APIs to automatically create payment \
                         batches and transmit to banking systems upon approval."
            .into(),
    });

    let duplicate_investigations = count_containing(events, &["Investigation", "Duplicate"]);
    if duplicate_investigations > 0 {
        recommendations.push(Recommendation {
            title: "AI-Powered Duplicate Detection".into(),
            description: "Use machine learning to detect potential duplicate invoices at \
                          the point of receipt by analyzing invoice numbers, amounts, \
                          dates, and vendor information."
                .into(),
            impact: Impact::Medium,
            time_saved: hours_per_week(duplicate_investigations, 25),
            affected_activities: activities(&[
                "Investigation",
                "Duplicate Confirmed",
                "Invoice Cancelled",
            ]),
            implementation: "Implement fuzzy matching algorithms and ML models trained on \
                             historical invoice data to flag potential duplicates with \
                             confidence scores."
                .into(),
        });
    }

    recommendations
}

fn count_exact(events: &[ProcessEvent], activity: &str) -> u64 {
    events.iter().filter(|e| e.activity == activity).count() as u64
}

fn count_containing(events: &[ProcessEvent], needles: &[&str]) -> u64 {
    events
        .iter()
        .filter(|e| needles.iter().any(|n| e.activity.contains(n)))
        .count() as u64
}

fn activities(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_owned()).collect()
}

/// `events * minutes_each`, rounded to whole hours per week.
fn hours_per_week(events: u64, minutes_each: u64) -> String {
    let hours = ((events * minutes_each) as f64 / 60.0).round() as u64;
    format!("~{hours} hours per week")
}
