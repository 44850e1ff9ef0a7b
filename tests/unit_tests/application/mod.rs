mod gig_request_parser_test;
mod structured_completer_test;
