mod common;

use agent_dashboard::extract::{EXCLUDED_NAMES, MAX_TREE_DEPTH};
use agent_dashboard::models::*;
use agent_dashboard::snapshot::{build_agent_record, build_snapshot, build_snapshot_at};
use chrono::{TimeZone, Utc};
use speculate2::speculate;
use tempfile::TempDir;

fn max_depth(node: &FileTreeNode) -> usize {
    node.children()
        .iter()
        .map(|child| 1 + max_depth(child))
        .max()
        .unwrap_or(0)
}

fn all_names(node: &FileTreeNode, out: &mut Vec<String>) {
    out.push(node.name().to_string());
    for child in node.children() {
        all_names(child, out);
    }
}

speculate! {
    before {
        let tmp = TempDir::new().expect("Failed to create temp dir");
        let ws = common::write_workspace(tmp.path());
        let hugo = common::agent("hugo", ws.clone());
    }

    describe "build_agent_record" {
        it "copies identity and marks the workspace active" {
            let record = build_agent_record(&hugo);

            assert_eq!(record.id, "hugo");
            assert_eq!(record.name, "Agent hugo");
            assert_eq!(record.emoji, "🚀");
            assert_eq!(record.color, "#F5A623");
            assert_eq!(record.status, AgentStatus::Active);
        }

        it "extracts projects in document order" {
            let record = build_agent_record(&hugo);
            let titles: Vec<_> = record.projects.iter().map(|p| p.title.as_str()).collect();
            assert_eq!(titles, vec!["Launch", "Website Relaunch", "Newsletter"]);

            let launch = &record.projects[0];
            assert_eq!(launch.icon, "🎯");
            assert_eq!(launch.status, ProjectStatus::Active);
            assert_eq!(launch.percent_complete, 50);
            assert_eq!(launch.next_step, "ship v2");
            assert_eq!(launch.referenced_file_count, 3);
            assert_eq!(launch.date, "2024-03-01");

            let relaunch = &record.projects[1];
            assert_eq!(relaunch.icon, "✅");
            assert_eq!(relaunch.status, ProjectStatus::Done);
            assert_eq!(relaunch.percent_complete, 100);
            assert_eq!(relaunch.summary, "Neue Seite ist live.");

            let newsletter = &record.projects[2];
            assert_eq!(newsletter.icon, "📄");
            assert_eq!(newsletter.status, ProjectStatus::Blocked);
            assert_eq!(newsletter.percent_complete, 30);
            assert_eq!(newsletter.date, "");
        }

        it "merges table and heartbeat tasks without duplicates" {
            let record = build_agent_record(&hugo);
            assert_eq!(
                record.tasks,
                vec![
                    RecurringTask::new("💬", "Slack Mentions", "Alle 5 Min"),
                    RecurringTask::new("🔍", "Wettbewerber Check", "Wöchentlich"),
                    RecurringTask::new("📝", "Notion Sync", "Täglich"),
                ]
            );
        }

        it "classifies knowledge sections" {
            let record = build_agent_record(&hugo);
            assert_eq!(
                record.knowledge,
                vec![
                    KnowledgeItem { name: "Pricing Model".into(), status: KnowledgeStatus::Learned },
                    KnowledgeItem { name: "Onboarding".into(), status: KnowledgeStatus::Missing },
                ]
            );
        }

        it "sorts timeline events by date label" {
            let record = build_agent_record(&hugo);
            let events: Vec<_> = record
                .timeline
                .iter()
                .map(|e| (e.date.as_str(), e.icon.as_str()))
                .collect();
            assert_eq!(
                events,
                vec![
                    ("2024-03-02 18:30", "🏗️"),
                    ("2024-03-01 09:00", "💬"),
                    ("2024-03-01", "📊"),
                ]
            );
        }

        it "summarizes the workspace tree" {
            let record = build_agent_record(&hugo);
            assert_eq!(record.files.name(), "workspace-hugo");

            let top: Vec<_> = record.files.children().iter().map(|n| n.name()).collect();
            assert_eq!(top, vec!["launch", "memory", "HEARTBEAT.md", "KNOWLEDGE.md", "PROJECTS.md"]);

            let launch: Vec<_> = record.files.children()[0].children().iter().map(|n| n.name()).collect();
            assert_eq!(launch, vec!["brief.md", "hero.png", "notes.txt"]);
        }

        it "never includes excluded names or exceeds the depth limit" {
            std::fs::create_dir_all(ws.join("a/b/c/d/e")).unwrap();
            std::fs::write(ws.join("a/b/c/d/e/deep.md"), "x").unwrap();
            std::fs::write(ws.join("a/b/cache"), "x").unwrap();

            let record = build_agent_record(&hugo);
            let mut names = Vec::new();
            all_names(&record.files, &mut names);

            assert!(names.iter().all(|n| !EXCLUDED_NAMES.contains(&n.as_str())));
            assert!(names.iter().all(|n| !n.starts_with('.')));
            assert!(max_depth(&record.files) <= MAX_TREE_DEPTH);
        }

        it "returns an offline record for a missing workspace" {
            let ghost = common::agent("ghost", tmp.path().join("workspace-ghost"));
            let record = build_agent_record(&ghost);

            assert_eq!(record.status, AgentStatus::Offline);
            assert!(record.projects.is_empty());
            assert!(record.tasks.is_empty());
            assert!(record.knowledge.is_empty());
            assert!(record.timeline.is_empty());
            assert_eq!(record.files, FileTreeNode::empty_directory("workspace-ghost"));
        }

        it "returns empty sections for an empty workspace" {
            let empty = tmp.path().join("workspace-empty");
            std::fs::create_dir(&empty).unwrap();
            let record = build_agent_record(&common::agent("empty", empty));

            assert_eq!(record.status, AgentStatus::Active);
            assert!(record.projects.is_empty());
            assert!(record.tasks.is_empty());
            assert!(record.knowledge.is_empty());
            assert!(record.timeline.is_empty());
            assert!(record.files.children().is_empty());
        }
    }

    describe "build_snapshot" {
        it "keeps configuration order" {
            let ghost = common::agent("ghost", tmp.path().join("workspace-ghost"));
            let snapshot = build_snapshot(&[ghost, hugo.clone()]);

            let ids: Vec<_> = snapshot.agents.iter().map(|a| a.id.as_str()).collect();
            assert_eq!(ids, vec!["ghost", "hugo"]);
        }

        it "is idempotent for unchanged documents" {
            let at = Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap();
            let first = build_snapshot_at(&[hugo.clone()], at);
            let second = build_snapshot_at(&[hugo.clone()], at);
            assert_eq!(first, second);
        }

        it "does not modify the source documents" {
            build_snapshot(&[hugo.clone()]);
            let projects = std::fs::read_to_string(ws.join("PROJECTS.md")).unwrap();
            assert_eq!(projects, common::PROJECTS);
        }

        it "serializes with the dashboard field names" {
            let at = Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap();
            let snapshot = build_snapshot_at(&[hugo.clone()], at);
            let json = serde_json::to_value(&snapshot).unwrap();

            assert_eq!(json["lastUpdated"], "2024-03-02T12:00:00Z");
            let agent = &json["agents"][0];
            assert_eq!(agent["status"], "active");
            assert_eq!(agent["projects"][0]["pct"], 50);
            assert_eq!(agent["projects"][0]["next"], "ship v2");
            assert_eq!(agent["projects"][0]["files"], 3);
            assert_eq!(agent["projects"][0]["status"], "active");
            assert!(agent["projects"][0]["detail"].is_string());
            assert_eq!(agent["tasks"][0]["freq"], "Alle 5 Min");
            assert_eq!(agent["knowledge"][0]["status"], "learned");
            assert_eq!(agent["files"]["children"][2]["name"], "HEARTBEAT.md");
            assert!(agent["files"]["children"][2]["size"].is_string());
        }
    }
}
