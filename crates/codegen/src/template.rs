/// React dashboard skeleton. `primary` is the entity name, `lower` its
/// lower-cased form used in the route hint.
pub fn render_dashboard(primary: &str, lower: &str) -> String {
    format!(
        r#"
import React, {{ useState }} from 'react';
import {{ Card, CardHeader, CardTitle, CardContent }} from '@/components/ui/card';
import {{ Button }} from '@/components/ui/button';

export default function {primary}Dashboard() {{
  const [items, setItems] = useState([
    {{ id: 1, name: 'Sample {primary} 1', status: 'Active' }},
    {{ id: 2, name: 'Sample {primary} 2', status: 'Pending' }}
  ]);

  return (
    <div className="p-8 bg-gray-50 min-h-screen">
      <div className="flex justify-between items-center mb-6">
        <h1 className="text-3xl font-bold text-gray-800">{primary} Manager</h1>
        <Button onClick={{() => alert('Create logic needed')}}>+ New {primary}</Button>
      </div>

      <div className="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
        {{items.map(item => (
          <Card key={{item.id}} className="hover:shadow-lg transition-shadow">
            <CardHeader>
              <CardTitle>{{item.name}}</CardTitle>
            </CardHeader>
            <CardContent>
              <p className="text-sm text-gray-500">Status: {{item.status}}</p>
              <div className="mt-4 flex gap-2">
                <Button variant="outline" size="sm">Edit</Button>
                <Button variant="destructive" size="sm">Delete</Button>
              </div>
            </CardContent>
          </Card>
        ))}}
      </div>
      
      <div className="mt-8 p-4 bg-blue-50 rounded-lg border border-blue-100">
        <h3 className="font-semibold text-blue-800">OmniArchitect Insight</h3>
        <p className="text-sm text-blue-600">
          This UI was generated based on the knowledge graph node: <strong>{primary}</strong>.
          Backend routes should be generated for <code>GET /{lower}s</code>.
        </p>
      </div>
    </div>
  );
}}
"#,
        primary = primary,
        lower = lower,
    )
}
