use std::time::Duration;

use amzsign_aws_v4::{generate_signing_key, RequestSigner, ServiceRequest, SignatureLocation};
use amzsign_core::Credential;
use chrono::{TimeZone, Utc};
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;

criterion_group!(benches, bench);
criterion_main!(benches);

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("aws_v4");

    let cred = Credential::new("access_key_id", "secret_access_key");
    let now = Utc
        .with_ymd_and_hms(2015, 8, 30, 12, 36, 0)
        .single()
        .expect("time must be valid");
    let req = ServiceRequest::get("iam.amazonaws.com")
        .with_query("Action", "ListUsers")
        .with_query("Version", "2010-05-08")
        .with_expires_in(Duration::from_secs(300));

    group.bench_function("signing_key", |b| {
        b.iter(|| generate_signing_key(&cred.secret_access_key, now, "us-east-1", "iam"))
    });

    group.bench_function("header", |b| {
        let s = RequestSigner::new("iam", "us-east-1");
        b.iter(|| s.sign_at(&req, &cred, now).expect("must success"))
    });

    group.bench_function("query", |b| {
        let s = RequestSigner::new("iam", "us-east-1").with_location(SignatureLocation::Query);
        b.iter(|| s.sign_at(&req, &cred, now).expect("must success"))
    });

    group.finish()
}
