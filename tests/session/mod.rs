mod end_to_end;
mod fake;
mod scenarios;
