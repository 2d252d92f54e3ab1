use super::{diagnostic_messages, CmdResult, Plan};

/// Side by side listing of current and new names. Nothing is renamed.
pub fn run(plan: &Plan) -> CmdResult {
    let mut result = CmdResult::default().with_report(plan.transform.report());
    for message in diagnostic_messages(&plan.series) {
        result.add_message(message);
    }
    result
}
