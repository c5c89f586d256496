mod monthly_tests;
