//! Built-in data used when no node file is given.

use treelist::{NodeKind, TreeNode};

pub fn nodes() -> Vec<TreeNode> {
    vec![
        TreeNode::new("ev-100", NodeKind::MaintenanceEvent, "Unit 2 turnaround")
            .status("in-progress")
            .editable()
            .child(
                TreeNode::new("sub-110", NodeKind::SubEvent, "Crude column C-201")
                    .status("open")
                    .editable()
                    .deletable()
                    .child(
                        TreeNode::new("grp-111", NodeKind::InspectionGroup, "Shell UT survey")
                            .status("open")
                            .editable()
                            .child(
                                TreeNode::new("ins-112", NodeKind::Inspection, "CML 1-12 thickness")
                                    .status("completed")
                                    .editable(),
                            )
                            .child(
                                TreeNode::new(
                                    "ins-113",
                                    NodeKind::Inspection,
                                    "CML 13-24 thickness",
                                )
                                .status("open")
                                .editable()
                                .deletable(),
                            ),
                    )
                    .child(
                        TreeNode::new("grp-114", NodeKind::InspectionGroup, "Internal visual")
                            .status("open"),
                    ),
            )
            .child(
                TreeNode::new("sub-120", NodeKind::SubEvent, "Heat exchanger E-104")
                    .status("open")
                    .deletable()
                    .child(
                        TreeNode::new("ins-121", NodeKind::Inspection, "Tube bundle corrosion")
                            .status("open")
                            .editable()
                            .deletable(),
                    ),
            ),
        TreeNode::new("ev-200", NodeKind::MaintenanceEvent, "Tank farm annual")
            .status("planned")
            .editable()
            .deletable()
            .child(
                TreeNode::new("grp-210", NodeKind::InspectionGroup, "Floor scan T-12")
                    .status("planned")
                    .editable(),
            ),
        TreeNode::new("ins-300", NodeKind::Inspection, "Flare line spot check")
            .status("open")
            .editable()
            .deletable(),
    ]
}
