mod gig_status_test;
mod gig_test;
mod pricing_test;
mod rating_test;
