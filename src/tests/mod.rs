mod test_straight_line;
