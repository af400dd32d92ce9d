doc_comment::doctest!("../../readme.md");
doc_comment::doctest!("../../graft_core/readme.md");
