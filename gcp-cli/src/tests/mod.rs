mod values_test;

use gcp_testutils::*;

use super::*;
