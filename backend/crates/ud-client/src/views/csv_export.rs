use ud_core::UserRecord;

use chrono::{DateTime, SecondsFormat, Utc};

pub const CSV_HEADER: [&str; 8] = [
    "ID",
    "Given names",
    "Surnames",
    "Email",
    "Phone",
    "Created at",
    "Modified at",
    "Status",
];

/// RFC 4180 document: CRLF line endings, quoted fields where needed
pub fn users_to_csv(users: &[UserRecord]) -> String {
    let mut out = String::new();
    push_record(&mut out, CSV_HEADER.iter().map(|h| h.to_string()));

    for user in users {
        push_record(
            &mut out,
            [
                user.id.to_string(),
                user.given_names.clone(),
                user.surnames.clone(),
                user.email.clone(),
                user.phone.clone(),
                user.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
                user.modified_at.to_rfc3339_opts(SecondsFormat::Secs, true),
                user.status.as_str().to_string(),
            ],
        );
    }

    out
}

fn push_record<I: IntoIterator<Item = String>>(out: &mut String, fields: I) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(&quote(&field));
    }
    out.push_str("\r\n");
}

fn quote(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Download name for an export taken at `now`
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("users_{}.csv", now.timestamp_millis())
}
