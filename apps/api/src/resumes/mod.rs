// Resume API: multipart upload, rule-based scoring, stored-document retrieval.

pub mod handlers;
