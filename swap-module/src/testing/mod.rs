mod test_suite;
