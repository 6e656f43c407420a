mod formula;
mod test_utils;
mod z3;
